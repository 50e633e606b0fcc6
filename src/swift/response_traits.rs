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

//! Accessor traits shared by the Swift response types, and the body
//! conventions applied when a response is received.

use crate::swift::error::ServiceError;
use crate::swift::types::SwiftRequest;
use crate::swift::utils::split_listing;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

#[macro_export]
/// Implements the `FromSwiftResponse` trait for write-style responses.
///
/// The whole body is drained; a non-empty body is the service's error text
/// and fails the call regardless of the status code.
macro_rules! impl_from_swift_response_write {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::swift::types::FromSwiftResponse for $ty {
                async fn from_swift_response(
                    request: $crate::swift::types::SwiftRequest,
                    response: Result<reqwest::Response, $crate::swift::error::Error>,
                ) -> Result<Self, $crate::swift::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    let status = resp.status();
                    let headers = std::mem::take(resp.headers_mut());
                    let body = $crate::swift::response_traits::check_write_body(resp.bytes().await?)?;
                    Ok(Self {
                        request,
                        status,
                        headers,
                        body,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `FromSwiftResponse` trait for responses whose body is
/// returned to the caller without interpretation.
macro_rules! impl_from_swift_response_read {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::swift::types::FromSwiftResponse for $ty {
                async fn from_swift_response(
                    request: $crate::swift::types::SwiftRequest,
                    response: Result<reqwest::Response, $crate::swift::error::Error>,
                ) -> Result<Self, $crate::swift::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    Ok(Self {
                        request,
                        status: resp.status(),
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp.bytes().await?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasSwiftFields` trait for the specified types.
macro_rules! impl_has_swift_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::swift::response_traits::HasSwiftFields for $ty {
                fn request(&self) -> &$crate::swift::types::SwiftRequest {
                    &self.request
                }

                fn status(&self) -> http::StatusCode {
                    self.status
                }

                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

pub trait HasSwiftFields {
    /// The request that was sent to the gateway.
    fn request(&self) -> &SwiftRequest;
    /// HTTP status returned by the gateway. It is informational only.
    fn status(&self) -> StatusCode;
    /// HTTP headers returned by the gateway.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the gateway.
    fn body(&self) -> &Bytes;
}

/// Returns the name of the container.
pub trait HasBucket: HasSwiftFields {
    #[inline]
    fn bucket(&self) -> &str {
        self.request().bucket.as_deref().unwrap_or_default()
    }
}

/// Returns the name of the object.
pub trait HasObject: HasSwiftFields {
    #[inline]
    fn object(&self) -> &str {
        self.request().object.as_deref().unwrap_or_default()
    }
}

/// Returns the value of the `ETag` header, without quotes.
pub trait HasEtagFromHeaders: HasSwiftFields {
    #[inline]
    fn etag(&self) -> Option<&str> {
        self.headers()
            .get("etag")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim_matches('"'))
    }
}

/// Write-style convention: an empty body means success, anything else is
/// the error text, kept byte for byte.
pub fn check_write_body(body: Bytes) -> Result<Bytes, ServiceError> {
    if body.is_empty() {
        Ok(body)
    } else {
        Err(ServiceError::ResponseBody(body))
    }
}

/// List-style convention: an empty body fails with `empty_msg`, otherwise
/// the body is split into one name per line.
pub fn parse_listing(body: &Bytes, empty_msg: &'static str) -> Result<Vec<String>, ServiceError> {
    if body.is_empty() {
        return Err(ServiceError::EmptyListing(empty_msg));
    }
    Ok(split_listing(body))
}
