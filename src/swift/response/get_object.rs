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

use crate::impl_from_swift_response_read;
use crate::impl_has_swift_fields;
use crate::swift::header_constants::CONTENT_RANGE;
use crate::swift::response_traits::{HasBucket, HasEtagFromHeaders, HasObject, HasSwiftFields};
use crate::swift::types::SwiftRequest;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of [get_object()](crate::swift::SwiftSession::get_object) API
///
/// The body is the object content, whatever its length. A non-empty body is
/// never treated as an error message here: if the gateway answers with an
/// error text, it shows up as content, and [`HasSwiftFields::status`] tells
/// the two apart.
#[derive(Debug)]
pub struct GetObjectResponse {
    pub(crate) request: SwiftRequest,
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl_has_swift_fields!(GetObjectResponse);
impl_from_swift_response_read!(GetObjectResponse);

impl HasBucket for GetObjectResponse {}
impl HasObject for GetObjectResponse {}
impl HasEtagFromHeaders for GetObjectResponse {}

impl GetObjectResponse {
    /// The object content.
    pub fn content(&self) -> &Bytes {
        &self.body
    }

    /// Consumes the response, returning the content.
    pub fn into_content(self) -> Bytes {
        self.body
    }

    /// Value of the `Content-Range` header of a ranged read.
    pub fn content_range(&self) -> Option<&str> {
        self.headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
    }
}
