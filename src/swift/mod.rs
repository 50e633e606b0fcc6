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

//! Implementation of the RADOS Gateway Swift API client

pub mod builders;
pub mod client;
pub mod creds;
pub mod error;
pub mod header_constants;
pub mod http;
pub mod multimap_ext;
pub mod object_content;
pub mod response;
pub mod response_traits;
pub mod session;
pub mod types;
pub mod utils;

pub use client::{SwiftClient, SwiftClientBuilder};
pub use session::SwiftSession;

use crate::swift::error::Error;
use std::path::Path;

/// Builds a client for `server_address` and authenticates `user` with `key`.
///
/// `cert_path`, when given and non-empty, names a PEM bundle that becomes the
/// only set of trusted CA certificates.
pub async fn authenticate(
    server_address: &str,
    cert_path: Option<&Path>,
    user: &str,
    key: &str,
) -> Result<SwiftSession, Error> {
    let base_url: http::BaseUrl = server_address.parse()?;
    SwiftClient::new(base_url, cert_path)?
        .authenticate(user, key)
        .await
}
