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
use crate::swift::builders::{UpdateBucketAcls, UpdateBucketAclsBldr};
use crate::swift::types::Acl;

impl SwiftSession {
    /// Creates an [`UpdateBucketAcls`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_swift::swift::{SwiftClient, http::BaseUrl, types::{Acl, SwiftApi}};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let base_url: BaseUrl = "http://127.0.0.1:7480".parse()?;
    /// let session = SwiftClient::new(base_url, None)?
    ///     .authenticate("ping:swift", "secret")
    ///     .await?;
    ///
    /// // everyone may read, only ping:swift may write
    /// session
    ///     .update_bucket_acls("via-bucket", Acl::new([Acl::ALL_USERS], ["ping:swift"]))
    ///     .build()
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn update_bucket_acls<S: Into<String>>(&self, bucket: S, acl: Acl) -> UpdateBucketAclsBldr {
        UpdateBucketAcls::builder()
            .session(self.clone())
            .bucket(bucket)
            .acl(acl)
    }
}
