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
use crate::swift::builders::{PutObject, PutObjectBldr};
use crate::swift::object_content::ObjectContent;

impl SwiftSession {
    /// Creates a [`PutObject`] request builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_swift::swift::{SwiftClient, http::BaseUrl, types::SwiftApi};
    /// use rgw_swift::swift::object_content::ObjectContent;
    /// use std::path::Path;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let base_url: BaseUrl = "http://127.0.0.1:7480".parse()?;
    /// let session = SwiftClient::new(base_url, None)?
    ///     .authenticate("ping:swift", "secret")
    ///     .await?;
    ///
    /// session
    ///     .put_object("via-bucket", "hello.txt", "123456789abcdefghij")
    ///     .build()
    ///     .send()
    ///     .await?;
    ///
    /// // upload a local file
    /// let content = ObjectContent::from(Path::new("/tmp/report.csv"));
    /// session
    ///     .put_object("via-bucket", "reports/report.csv", content)
    ///     .build()
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn put_object<S1, S2, C>(&self, bucket: S1, object: S2, content: C) -> PutObjectBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        C: Into<ObjectContent>,
    {
        PutObject::builder()
            .session(self.clone())
            .bucket(bucket)
            .object(object)
            .content(content)
    }
}
