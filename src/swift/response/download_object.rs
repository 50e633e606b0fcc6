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
use crate::swift::response_traits::{HasBucket, HasEtagFromHeaders, HasObject};
use crate::swift::types::SwiftRequest;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::path::{Path, PathBuf};

/// Response of [download_object()](crate::swift::SwiftSession::download_object) API
///
/// The content went to [`DownloadObjectResponse::path`], so `body()` is empty.
#[derive(Debug)]
pub struct DownloadObjectResponse {
    pub(crate) request: SwiftRequest,
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) path: PathBuf,
    pub(crate) bytes_written: u64,
}

impl_has_swift_fields!(DownloadObjectResponse);

impl HasBucket for DownloadObjectResponse {}
impl HasObject for DownloadObjectResponse {}
impl HasEtagFromHeaders for DownloadObjectResponse {}

impl DownloadObjectResponse {
    /// The file the content was written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
