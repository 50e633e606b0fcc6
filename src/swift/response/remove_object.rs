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
use crate::swift::response_traits::{HasBucket, HasObject};
use crate::swift::types::SwiftRequest;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of [remove_object()](crate::swift::SwiftSession::remove_object) API
///
/// Only transport failures are reported; the body is kept but not inspected.
#[derive(Debug)]
pub struct RemoveObjectResponse {
    pub(crate) request: SwiftRequest,
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl_has_swift_fields!(RemoveObjectResponse);
impl_from_swift_response_read!(RemoveObjectResponse);

impl HasBucket for RemoveObjectResponse {}
impl HasObject for RemoveObjectResponse {}
