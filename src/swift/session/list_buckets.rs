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
use crate::swift::builders::{ListBuckets, ListBucketsBldr};

impl SwiftSession {
    /// Creates a [`ListBuckets`] request builder.
    ///
    /// To execute the request, call [`ListBuckets::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a
    /// [`ListBucketsResponse`](crate::swift::response::ListBucketsResponse).
    /// An account without containers yields an error, not an empty list.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_swift::swift::{SwiftClient, http::BaseUrl, types::SwiftApi};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let base_url: BaseUrl = "http://127.0.0.1:7480".parse()?;
    /// let session = SwiftClient::new(base_url, None)?
    ///     .authenticate("ping:swift", "secret")
    ///     .await?;
    ///
    /// let resp = session.list_buckets().build().send().await?;
    /// for bucket in resp.buckets() {
    ///     println!("{bucket}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsBldr {
        ListBuckets::builder().session(self.clone())
    }
}
