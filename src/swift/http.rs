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

//! HTTP URL definitions

use crate::swift::error::ValidationErr;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::utils::{url_encode, urlencode_object_key};
use http::Uri;
use std::fmt;
use std::str::FromStr;

/// Address of the gateway, used to reach its `/auth` endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    path: String,
}

impl BaseUrl {
    /// Returns the host of this URL, IPv6 addresses are bracketed.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the explicit port, or `0` when the scheme default is used.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the path prefix without a trailing slash; empty for the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the URL of the authentication endpoint.
    pub fn auth_url(&self) -> String {
        format!("{self}/auth")
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = if self.https { "https" } else { "http" };
        write!(f, "{scheme}://{}", self.host)?;
        if self.port > 0 {
            write!(f, ":{}", self.port)?;
        }
        f.write_str(&self.path)
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_swift::swift::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://rgw.example.net:8443".parse().unwrap();
    /// assert_eq!(base_url.auth_url(), "https://rgw.example.net:8443/auth");
    ///
    /// // scheme defaults to https
    /// let base_url: BaseUrl = "rgw.example.net".parse().unwrap();
    /// assert!(base_url.https);
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(ValidationErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let mut host = match url.host() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };
        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = format!("[{host}]");
        }

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let path = url.path().trim_end_matches('/').to_string();

        Ok(BaseUrl {
            https,
            host,
            port,
            path,
        })
    }
}

/// Per-account storage endpoint handed out by the gateway on authentication.
///
/// Every container and object path is rooted under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageUrl(String);

impl StorageUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds `storage_url[/bucket[/object]][?query]`.
    ///
    /// The bucket is encoded as a single path segment; the object key keeps
    /// its `/` separators.
    pub fn build_url(
        &self,
        bucket: Option<&str>,
        object: Option<&str>,
        query_params: &Multimap,
    ) -> String {
        let mut url = self.0.clone();
        if let Some(bucket) = bucket {
            url.push('/');
            url.push_str(&url_encode(bucket));
            if let Some(object) = object {
                url.push('/');
                url.push_str(&urlencode_object_key(object));
            }
        }
        let query = query_params.to_query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

impl fmt::Display for StorageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StorageUrl {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let invalid = |cause: &str| ValidationErr::InvalidStorageUrl {
            url: s.to_string(),
            cause: cause.to_string(),
        };

        let url = s
            .parse::<Uri>()
            .map_err(|e| invalid(&e.to_string()))?;
        match url.scheme_str() {
            Some("http") | Some("https") => {}
            _ => return Err(invalid("scheme must be http or https")),
        }
        if url.host().is_none_or(str::is_empty) {
            return Err(invalid("host is missing"));
        }
        if url.query().is_some() {
            return Err(invalid("query must be none"));
        }

        Ok(StorageUrl(s.trim_end_matches('/').to_string()))
    }
}
