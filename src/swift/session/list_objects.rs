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
use crate::swift::builders::{ListObjects, ListObjectsBldr};

impl SwiftSession {
    /// Creates a [`ListObjects`] request builder.
    ///
    /// Narrow the listing with `prefix`, `marker`, `path` and `limit`
    /// (default 1000).
    pub fn list_objects<S: Into<String>>(&self, bucket: S) -> ListObjectsBldr {
        ListObjects::builder()
            .session(self.clone())
            .bucket(bucket)
    }
}
