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

//! Credential providers

use std::fmt;

#[derive(Clone)]
/// Credentials contain the Swift user (`account:subuser`) and its secret key
pub struct Credentials {
    pub user: String,
    pub key: String,
}

impl Credentials {
    pub fn new<U: Into<String>, K: Into<String>>(user: U, key: K) -> Self {
        Self {
            user: user.into(),
            key: key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Provider trait to fetch credentials
pub trait Provider: fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given user and secret key
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_swift::swift::creds::StaticProvider;
    /// let provider = StaticProvider::new("ping:swift", "secret");
    /// ```
    pub fn new(user: &str, key: &str) -> StaticProvider {
        StaticProvider {
            creds: Credentials::new(user, key),
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key() {
        let provider = StaticProvider::new("ping:swift", "s3cr3t-key");
        let out = format!("{provider:?}");
        assert!(out.contains("ping:swift"));
        assert!(!out.contains("s3cr3t-key"));
        assert_eq!(provider.fetch().key, "s3cr3t-key");
    }
}
