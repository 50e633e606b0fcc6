// RADOS Gateway Swift client library for Rust
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # RADOS Gateway Swift client (`rgw-swift`)
//!
//! This crate provides a strongly-typed, async interface to the Swift-compatible
//! API of a Ceph RADOS Gateway.
//!
//! A [`swift::SwiftClient`] owns the HTTP transport (optional custom CA bundle,
//! fixed 5 second timeout). Authenticating it yields a [`swift::SwiftSession`]
//! holding the auth token and the per-account storage URL; every bucket and
//! object operation is a request builder obtained from the session.
//!
//! All request builders implement the [`swift::types::SwiftApi`] trait, which provides
//! the async [`send`](crate::swift::types::SwiftApi::send) method to execute the
//! request and return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use rgw_swift::swift::SwiftClient;
//! use rgw_swift::swift::http::BaseUrl;
//! use rgw_swift::swift::types::SwiftApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "https://rgw.example.net".parse().unwrap();
//!     let session = SwiftClient::new(base_url, None)
//!         .unwrap()
//!         .authenticate("ping:swift", "secret")
//!         .await
//!         .expect("authentication failed");
//!
//!     session
//!         .put_object("via-bucket", "hello.txt", "hello world")
//!         .build()
//!         .send()
//!         .await
//!         .expect("upload failed");
//!
//!     let resp = session
//!         .list_objects("via-bucket")
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!     println!("objects: {:?}", resp.objects());
//! }
//! ```
//!
//! ## Design
//! - Each operation on [`swift::SwiftSession`] returns a builder struct
//! - Builders implement [`swift::types::ToSwiftRequest`] for request conversion and [`swift::types::SwiftApi`] for execution
//! - Responses implement [`swift::types::FromSwiftResponse`]; write-style calls fail on a
//!   non-empty body, listings fail on an empty body

#![allow(clippy::result_large_err)]
pub mod swift;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
