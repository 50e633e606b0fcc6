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

use crate::impl_has_swift_fields;
use crate::swift::error::Error;
use crate::swift::response_traits::parse_listing;
use crate::swift::types::{FromSwiftResponse, SwiftRequest};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::mem;

/// Response of [list_buckets()](crate::swift::SwiftSession::list_buckets) API
#[derive(Debug)]
pub struct ListBucketsResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    buckets: Vec<String>,
}

impl_has_swift_fields!(ListBucketsResponse);

impl ListBucketsResponse {
    /// Container names, in the order returned by the gateway.
    pub fn buckets(&self) -> &[String] {
        &self.buckets
    }
}

#[async_trait::async_trait]
impl FromSwiftResponse for ListBucketsResponse {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let status = resp.status();
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let buckets = parse_listing(&body, "bucket list is empty")?;

        Ok(Self {
            request,
            status,
            headers,
            body,
            buckets,
        })
    }
}
