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

use super::SwiftSession;
use crate::swift::builders::{CopyObject, CopyObjectBldr};

impl SwiftSession {
    /// Creates a [`CopyObject`] request builder copying
    /// `src_bucket/src_object` to `bucket/object` on the gateway.
    pub fn copy_object<S1, S2, S3, S4>(
        &self,
        src_bucket: S1,
        src_object: S2,
        bucket: S3,
        object: S4,
    ) -> CopyObjectBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        CopyObject::builder()
            .session(self.clone())
            .src_bucket(src_bucket)
            .src_object(src_object)
            .bucket(bucket)
            .object(object)
    }
}
