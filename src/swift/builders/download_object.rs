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

use crate::swift::error::{Error, ValidationErr};
use crate::swift::response::DownloadObjectResponse;
use crate::swift::session::SwiftSession;
use crate::swift::types::{SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_bucket_name, check_object_name};
use async_std::io::WriteExt;
use bytes::Bytes;
use futures_util::StreamExt;
use http::Method;
use std::mem;
use std::path::PathBuf;
use typed_builder::TypedBuilder;

/// Argument builder for downloading an object into a local file.
///
/// The file is created (or truncated) before the request is sent and the
/// response body is streamed into it chunk by chunk. The body is written as
/// received; it is not checked for an error message.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DownloadObject {
    #[builder(!default)]
    session: SwiftSession,
    #[builder(setter(into))]
    bucket: String,
    #[builder(setter(into))]
    object: String,
    #[builder(setter(into))]
    path: PathBuf,
}

/// Builder type for DownloadObject
pub type DownloadObjectBldr =
    DownloadObjectBuilder<((SwiftSession,), (String,), (String,), (PathBuf,))>;

impl ToSwiftRequest for DownloadObject {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        Ok(SwiftRequest::builder()
            .session(self.session)
            .method(Method::GET)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .build())
    }
}

impl DownloadObject {
    /// Sends the request and writes the body to the target file.
    pub async fn send(self) -> Result<DownloadObjectResponse, Error> {
        let path = self.path.clone();
        let mut request = self.to_swift_request()?;

        let mut file = async_std::fs::File::create(&path).await?;

        let mut resp = request.execute().await?;
        let status = resp.status();
        let headers = mem::take(resp.headers_mut());

        let mut bytes_written: u64 = 0;
        let mut stream = resp.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            bytes_written += chunk.len() as u64;
        }
        file.flush().await?;

        Ok(DownloadObjectResponse {
            request,
            status,
            headers,
            body: Bytes::new(),
            path,
            bytes_written,
        })
    }
}
