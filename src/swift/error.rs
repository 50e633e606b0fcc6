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

//! Error definitions for Swift operations

use bytes::Bytes;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring the client or building a request.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error("invalid storage URL '{url}': {cause}")]
    InvalidStorageUrl { url: String, cause: String },

    #[error("unable to read CA certificate file {path:?}: {source}")]
    CertFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CA certificate bundle {path:?}: {cause}")]
    InvalidCertificate { path: PathBuf, cause: String },

    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("list limit {got} is out of range 1..={max}")]
    InvalidListLimit { got: u32, max: u32 },

    #[error("invalid value for header {name}: {cause}")]
    InvalidHeaderValue { name: String, cause: String },

    #[error("invalid byte range {start}-{end}; start must not exceed end")]
    InvalidRange { start: u64, end: u64 },

    #[error("no credentials provided")]
    MissingCredentials,

    #[error("unable to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Transport level failures: DNS, connect, TLS, timeout or body transfer.
///
/// These are never retried.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("{0}")]
    ReqwestError(#[from] reqwest::Error),
}

/// Error body returned by the `/auth` endpoint on rejection.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AuthFailure {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub host_id: String,
    #[serde(default)]
    pub request_id: String,
}

impl AuthFailure {
    /// Parses the (already truncated) body of a rejected auth request.
    pub fn parse(body: &[u8]) -> Result<AuthFailure, AuthErr> {
        serde_json::from_slice(body).map_err(AuthErr::MalformedResponse)
    }
}

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthErr {
    /// The service rejected the credentials; displays as the service error code.
    #[error("{}", .0.code)]
    Rejected(AuthFailure),

    #[error("unable to parse auth failure response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("auth response is missing the {0} header")]
    MissingSessionHeader(&'static str),
}

/// Failures reported by the storage service through the response body.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A write-style call returned a non-empty body. The bytes are kept verbatim.
    #[error("{}", String::from_utf8_lossy(.0))]
    ResponseBody(Bytes),

    #[error("{0}")]
    EmptyListing(&'static str),
}

#[derive(Debug, Error)]
pub enum IoError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
}

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Auth(#[from] AuthErr),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Io(#[from] IoError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::ReqwestError(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(IoError::IOError(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_parse() {
        let body = br#"{"Code":"AccessDenied","RequestId":"tx000001","HostId":"zone-a"}"#;
        let failure = AuthFailure::parse(body).unwrap();
        assert_eq!(failure.code, "AccessDenied");
        assert_eq!(failure.request_id, "tx000001");
        assert_eq!(failure.host_id, "zone-a");
    }

    #[test]
    fn test_auth_failure_missing_fields_default_to_empty() {
        let failure = AuthFailure::parse(br#"{"Code":"InvalidAccessKeyId"}"#).unwrap();
        assert_eq!(failure.code, "InvalidAccessKeyId");
        assert!(failure.host_id.is_empty());
        assert!(failure.request_id.is_empty());
    }

    #[test]
    fn test_auth_failure_malformed() {
        let err = AuthFailure::parse(b"<html>denied</html>").unwrap_err();
        assert!(matches!(err, AuthErr::MalformedResponse(_)));
    }

    #[test]
    fn test_rejected_displays_code() {
        let err: Error = AuthErr::Rejected(AuthFailure {
            code: "AccessDenied".into(),
            ..Default::default()
        })
        .into();
        assert_eq!(err.to_string(), "AccessDenied");
    }

    #[test]
    fn test_response_body_displays_verbatim() {
        let err: Error = ServiceError::ResponseBody(Bytes::from_static(b"NoSuchBucket")).into();
        assert_eq!(err.to_string(), "NoSuchBucket");
    }
}
