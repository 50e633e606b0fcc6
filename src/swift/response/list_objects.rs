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
use crate::swift::response_traits::{HasBucket, parse_listing};
use crate::swift::types::{FromSwiftResponse, SwiftRequest};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::mem;

/// Response of [list_objects()](crate::swift::SwiftSession::list_objects) API
///
/// An empty container is reported as an error rather than an empty list.
#[derive(Debug)]
pub struct ListObjectsResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    objects: Vec<String>,
}

impl_has_swift_fields!(ListObjectsResponse);

impl HasBucket for ListObjectsResponse {}

impl ListObjectsResponse {
    /// Object names, in the order returned by the gateway.
    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    /// Consumes the response, returning the object names.
    pub fn into_objects(self) -> Vec<String> {
        self.objects
    }
}

#[async_trait::async_trait]
impl FromSwiftResponse for ListObjectsResponse {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let status = resp.status();
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let objects = parse_listing(&body, "object list is empty")?;

        Ok(Self {
            request,
            status,
            headers,
            body,
            objects,
        })
    }
}
