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

use super::SwiftClient;
use crate::swift::creds::Credentials;
use crate::swift::error::{AuthErr, AuthFailure, Error, ValidationErr};
use crate::swift::header_constants::{X_AUTH_KEY, X_AUTH_TOKEN, X_AUTH_USER, X_STORAGE_URL};
use crate::swift::http::StorageUrl;
use crate::swift::session::SwiftSession;
use crate::swift::utils::check_header_value;
use bytes::{Bytes, BytesMut};
use http::{HeaderMap, StatusCode};

/// Only this many bytes of a rejected auth response are parsed.
pub const AUTH_FAILURE_BODY_LIMIT: usize = 1024;

impl SwiftClient {
    /// Exchanges a user and key for an auth token and storage URL.
    ///
    /// Success is signalled only by `204 No Content`. Any other status is a
    /// rejection whose JSON body carries the service error code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rgw_swift::swift::SwiftClient;
    /// use rgw_swift::swift::http::BaseUrl;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let base_url: BaseUrl = "https://rgw.example.net".parse()?;
    /// let client = SwiftClient::new(base_url, None)?;
    /// let session = client.authenticate("ping:swift", "secret").await?;
    /// println!("storage URL: {}", session.storage_url());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn authenticate<U: Into<String>, K: Into<String>>(
        &self,
        user: U,
        key: K,
    ) -> Result<SwiftSession, Error> {
        self.authenticate_with(Credentials::new(user, key)).await
    }

    /// Authenticates with the credentials of the configured provider.
    pub async fn authenticate_with_provider(&self) -> Result<SwiftSession, Error> {
        let creds = match &self.shared.provider {
            Some(provider) => provider.fetch(),
            None => return Err(ValidationErr::MissingCredentials.into()),
        };
        self.authenticate_with(creds).await
    }

    async fn authenticate_with(&self, creds: Credentials) -> Result<SwiftSession, Error> {
        check_header_value(X_AUTH_USER, &creds.user)?;
        check_header_value(X_AUTH_KEY, &creds.key)?;

        let url = self.shared.base_url.auth_url();
        log::debug!("GET {url} (user {})", creds.user);

        let mut resp = self
            .http_client()
            .get(&url)
            .header(X_AUTH_USER, &creds.user)
            .header(X_AUTH_KEY, &creds.key)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NO_CONTENT {
            let auth_token = session_header(resp.headers(), X_AUTH_TOKEN)?;
            let storage_url: StorageUrl = session_header(resp.headers(), X_STORAGE_URL)?.parse()?;
            log::debug!("authenticated {}; storage URL {storage_url}", creds.user);
            return Ok(SwiftSession::new(self.clone(), auth_token, storage_url));
        }

        let body = read_bounded(&mut resp, AUTH_FAILURE_BODY_LIMIT).await?;
        let failure = AuthFailure::parse(&body)?;
        log::warn!(
            "authentication of {} rejected with {status}: {}",
            creds.user,
            failure.code
        );
        Err(AuthErr::Rejected(failure).into())
    }
}

fn session_header(headers: &HeaderMap, name: &'static str) -> Result<String, AuthErr> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .ok_or(AuthErr::MissingSessionHeader(name))
}

/// Reads at most `limit` bytes of the body; the rest is never pulled.
async fn read_bounded(resp: &mut reqwest::Response, limit: usize) -> Result<Bytes, reqwest::Error> {
    let mut buf = BytesMut::with_capacity(limit);
    while buf.len() < limit {
        match resp.chunk().await? {
            Some(chunk) => {
                let take = chunk.len().min(limit - buf.len());
                buf.extend_from_slice(&chunk[..take]);
            }
            None => break,
        }
    }
    Ok(buf.freeze())
}
