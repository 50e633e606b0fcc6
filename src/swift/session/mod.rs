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

//! Authenticated session and its bucket and object operations

use crate::swift::client::SwiftClient;
use crate::swift::error::Error;
use crate::swift::header_constants::{CONTENT_LENGTH, X_AUTH_TOKEN};
use crate::swift::http::StorageUrl;
use crate::swift::multimap_ext::Multimap;
use crate::swift::object_content::ObjectContent;
use http::Method;
use reqwest::Body;
use std::fmt;
use std::sync::Arc;

mod copy_object;
mod create_bucket;
mod download_object;
mod get_object;
mod list_buckets;
mod list_objects;
mod put_object;
mod remove_bucket;
mod remove_object;
mod update_bucket_acls;

/// Session returned by a successful authentication.
///
/// The token and storage URL are fixed for the lifetime of the session and
/// never refreshed. Clones share the same context and transport, so a session
/// can be used from many tasks at once.
#[derive(Clone)]
pub struct SwiftSession {
    inner: Arc<SessionContext>,
}

struct SessionContext {
    client: SwiftClient,
    auth_token: String,
    storage_url: StorageUrl,
}

impl fmt::Debug for SwiftSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwiftSession")
            .field("storage_url", &self.inner.storage_url)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

impl SwiftSession {
    pub(crate) fn new(client: SwiftClient, auth_token: String, storage_url: StorageUrl) -> Self {
        Self {
            inner: Arc::new(SessionContext {
                client,
                auth_token,
                storage_url,
            }),
        }
    }

    /// Token sent as `X-Auth-Token` with every request of this session.
    pub fn auth_token(&self) -> &str {
        &self.inner.auth_token
    }

    /// Per-account storage URL discovered during authentication.
    pub fn storage_url(&self) -> &StorageUrl {
        &self.inner.storage_url
    }

    /// The transport client this session was created from.
    pub fn client(&self) -> &SwiftClient {
        &self.inner.client
    }

    /// Sends one request under the storage URL with the auth token attached.
    ///
    /// The response is returned as is; interpreting the status and body is
    /// left to the operation's response type.
    pub(crate) async fn execute(
        &self,
        method: &Method,
        bucket: Option<&str>,
        object: Option<&str>,
        query_params: &Multimap,
        headers: &Multimap,
        body: Option<ObjectContent>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.inner.storage_url.build_url(bucket, object, query_params);

        let mut req = self
            .inner
            .client
            .http_client()
            .request(method.clone(), &url)
            .header(X_AUTH_TOKEN, &self.inner.auth_token);

        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        match body {
            Some(content) => {
                let (stream, size) = content.to_stream().await?;
                if let Some(len) = size.value() {
                    req = req.header(CONTENT_LENGTH, len.to_string());
                }
                req = req.body(Body::wrap_stream(stream));
            }
            None if *method == Method::PUT || *method == Method::POST => {
                req = req.header(CONTENT_LENGTH, "0");
            }
            None => {}
        }

        log::debug!("{method} {url}");
        Ok(req.send().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swift::http::BaseUrl;

    #[test]
    fn test_debug_redacts_token() {
        let base_url: BaseUrl = "http://127.0.0.1:7480".parse().unwrap();
        let client = SwiftClient::new(base_url, None).unwrap();
        let session = SwiftSession::new(
            client,
            "AUTH_rgwtk-secret".into(),
            "http://127.0.0.1:7480/swift/v1".parse().unwrap(),
        );
        let out = format!("{session:?}");
        assert!(out.contains("/swift/v1"));
        assert!(!out.contains("AUTH_rgwtk-secret"));
        assert_eq!(session.auth_token(), "AUTH_rgwtk-secret");
    }
}
