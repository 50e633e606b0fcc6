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
use crate::swift::builders::{DownloadObject, DownloadObjectBldr};
use std::path::PathBuf;

impl SwiftSession {
    /// Creates a [`DownloadObject`] request builder that writes the object
    /// to `path`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_swift::swift::{SwiftClient, http::BaseUrl};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let base_url: BaseUrl = "http://127.0.0.1:7480".parse()?;
    /// let session = SwiftClient::new(base_url, None)?
    ///     .authenticate("ping:swift", "secret")
    ///     .await?;
    ///
    /// let resp = session
    ///     .download_object("via-bucket", "reports/report.csv", "/tmp/report.csv")
    ///     .build()
    ///     .send()
    ///     .await?;
    /// println!("wrote {} bytes", resp.bytes_written());
    /// # Ok(())
    /// # }
    /// ```
    pub fn download_object<S1, S2, P>(&self, bucket: S1, object: S2, path: P) -> DownloadObjectBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        P: Into<PathBuf>,
    {
        DownloadObject::builder()
            .session(self.clone())
            .bucket(bucket)
            .object(object)
            .path(path)
    }
}
