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
use crate::swift::builders::{RemoveBucket, RemoveBucketBldr};
use crate::swift::error::{Error, ServiceError};
use crate::swift::response::RemoveBucketResponse;
use crate::swift::types::SwiftApi;

impl SwiftSession {
    /// Creates a [`RemoveBucket`] request builder.
    pub fn remove_bucket<S: Into<String>>(&self, bucket: S) -> RemoveBucketBldr {
        RemoveBucket::builder()
            .session(self.clone())
            .bucket(bucket)
    }

    /// Removes every object listed in one listing call, then the container.
    ///
    /// Containers holding more objects than a single listing returns are
    /// left non-empty and the final removal fails.
    pub async fn remove_and_purge_bucket<S: Into<String>>(
        &self,
        bucket: S,
    ) -> Result<RemoveBucketResponse, Error> {
        let bucket: String = bucket.into();

        let objects = match self.list_objects(&bucket).build().send().await {
            Ok(resp) => resp.into_objects(),
            Err(Error::Service(ServiceError::EmptyListing(_))) => Vec::new(),
            Err(e) => return Err(e),
        };

        for object in objects {
            self.remove_object(&bucket, object).build().send().await?;
        }

        self.remove_bucket(bucket).build().send().await
    }
}
