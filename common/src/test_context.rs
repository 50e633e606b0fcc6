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

use crate::mock_server::{DEFAULT_KEY, DEFAULT_USER, MockSwiftServer};
use rgw_swift::swift::http::BaseUrl;
use rgw_swift::swift::{SwiftClient, SwiftSession};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a test needs to talk to a gateway.
///
/// When `SWIFT_SERVER_ENDPOINT` is set the tests run against that gateway,
/// otherwise an in-process [`MockSwiftServer`] is started and `mock` is set.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub session: SwiftSession,
    pub client: SwiftClient,
    pub base_url: BaseUrl,
    pub user: String,
    pub key: String,
    pub ssl_cert_file: Option<PathBuf>,
    pub mock: Option<Arc<MockSwiftServer>>,
}

impl TestContext {
    pub async fn new_from_env() -> Self {
        match std::env::var("SWIFT_SERVER_ENDPOINT") {
            Ok(host) if !host.is_empty() => Self::new_from_server(host).await,
            _ => Self::new_with_mock().await,
        }
    }

    async fn new_from_server(host: String) -> Self {
        log::debug!("SWIFT_SERVER_ENDPOINT={host}");
        let user: String = std::env::var("SWIFT_USER").unwrap_or(DEFAULT_USER.to_string());
        log::debug!("SWIFT_USER={user}");
        let key: String = std::env::var("SWIFT_KEY").unwrap_or(DEFAULT_KEY.to_string());
        log::debug!("SWIFT_KEY=*****");
        let ssl_cert_file: Option<PathBuf> = std::env::var("SWIFT_SSL_CERT_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        log::debug!("SWIFT_SSL_CERT_FILE={ssl_cert_file:?}");

        let base_url: BaseUrl = host.parse().unwrap();
        let client = SwiftClient::new(base_url.clone(), ssl_cert_file.as_deref()).unwrap();
        let session = client.authenticate(&user, &key).await.unwrap();

        Self {
            session,
            client,
            base_url,
            user,
            key,
            ssl_cert_file,
            mock: None,
        }
    }

    async fn new_with_mock() -> Self {
        let mock = MockSwiftServer::start().await.unwrap();
        let base_url: BaseUrl = mock.base_url().parse().unwrap();
        let client = SwiftClient::new(base_url.clone(), None).unwrap();
        let session = client.authenticate(DEFAULT_USER, DEFAULT_KEY).await.unwrap();

        Self {
            session,
            client,
            base_url,
            user: DEFAULT_USER.to_string(),
            key: DEFAULT_KEY.to_string(),
            ssl_cert_file: None,
            mock: Some(Arc::new(mock)),
        }
    }

    /// The mock server, or `None` when running against a real gateway.
    ///
    /// Tests that inspect recorded requests or queue canned replies return
    /// early when this is `None`.
    pub fn mock(&self) -> Option<&MockSwiftServer> {
        self.mock.as_deref()
    }
}
