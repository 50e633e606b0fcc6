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

//! Transport client for the RADOS Gateway Swift API

use crate::swift::creds::Provider;
use crate::swift::error::{Error, ValidationErr};
use crate::swift::http::BaseUrl;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

mod authenticate;

pub use authenticate::AUTH_FAILURE_BODY_LIMIT;

/// Fixed timeout applied to every request, the response body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Builder for [`SwiftClient`].
#[derive(Debug)]
pub struct SwiftClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    ssl_cert_file: Option<PathBuf>,
    app_info: Option<(String, String)>,
}

impl SwiftClientBuilder {
    /// Creates a builder given a base URL for the gateway.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            ssl_cert_file: None,
            app_info: None,
        }
    }

    /// Set the credential provider used by
    /// [`SwiftClient::authenticate_with_provider`].
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CA certs to trust. The file must contain PEM
    /// encoded certificates. When set, only these certificates are trusted;
    /// the built-in root store is not consulted. An empty path is ignored.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from);
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<SwiftClient, Error> {
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .timeout(REQUEST_TIMEOUT);

        let mut user_agent = String::from("RGW-Swift (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") rgw-swift/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(path) = self.ssl_cert_file {
            let mut buf = Vec::new();
            File::open(&path)
                .and_then(|mut file| file.read_to_end(&mut buf))
                .map_err(|source| ValidationErr::CertFileRead {
                    path: path.clone(),
                    source,
                })?;

            let certs = reqwest::Certificate::from_pem_bundle(&buf).map_err(|e| {
                ValidationErr::InvalidCertificate {
                    path: path.clone(),
                    cause: e.to_string(),
                }
            })?;
            if certs.is_empty() {
                return Err(ValidationErr::InvalidCertificate {
                    path,
                    cause: "no PEM encoded certificate found".into(),
                }
                .into());
            }

            builder = builder.tls_built_in_root_certs(false);
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(SwiftClient {
            http_client: builder.build().map_err(ValidationErr::HttpClient)?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider: self.provider,
            }),
        })
    }
}

/// Unauthenticated client for a RADOS Gateway.
///
/// Holds the HTTP transport (connection pool, trust roots, timeout) and the
/// gateway address. Calling [`SwiftClient::authenticate`] yields a
/// [`SwiftSession`](crate::swift::SwiftSession) that shares this transport.
#[derive(Clone, Debug)]
pub struct SwiftClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}

impl SwiftClient {
    /// Returns a client with given base URL and no custom trust roots.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_swift::swift::SwiftClient;
    /// use rgw_swift::swift::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://127.0.0.1:7480".parse().unwrap();
    /// let client = SwiftClient::new(base_url, None).unwrap();
    /// ```
    pub fn new(base_url: BaseUrl, ssl_cert_file: Option<&Path>) -> Result<Self, Error> {
        SwiftClientBuilder::new(base_url)
            .ssl_cert_file(ssl_cert_file)
            .build()
    }

    /// Returns a builder for a client with given base URL.
    pub fn builder(base_url: BaseUrl) -> SwiftClientBuilder {
        SwiftClientBuilder::new(base_url)
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}
