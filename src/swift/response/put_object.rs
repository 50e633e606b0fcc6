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

use crate::impl_from_swift_response_write;
use crate::impl_has_swift_fields;
use crate::swift::response_traits::{HasBucket, HasEtagFromHeaders, HasObject};
use crate::swift::types::SwiftRequest;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of [put_object()](crate::swift::SwiftSession::put_object) API
#[derive(Debug)]
pub struct PutObjectResponse {
    pub(crate) request: SwiftRequest,
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl_has_swift_fields!(PutObjectResponse);
impl_from_swift_response_write!(PutObjectResponse);

impl HasBucket for PutObjectResponse {}
impl HasObject for PutObjectResponse {}
impl HasEtagFromHeaders for PutObjectResponse {}
