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
use crate::swift::builders::{CreateBucket, CreateBucketBldr};

impl SwiftSession {
    /// Creates a [`CreateBucket`] request builder.
    ///
    /// Set an access control list with
    /// [`acl`](crate::swift::builders::CreateBucketBuilder::acl) to create
    /// the container with read and write grants.
    pub fn create_bucket<S: Into<String>>(&self, bucket: S) -> CreateBucketBldr {
        CreateBucket::builder()
            .session(self.clone())
            .bucket(bucket)
    }
}
