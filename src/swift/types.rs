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

//! Core Swift types and trait definitions

use crate::swift::error::{Error, ValidationErr};
use crate::swift::header_constants::{X_CONTAINER_READ, X_CONTAINER_WRITE};
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::object_content::ObjectContent;
use crate::swift::session::SwiftSession;
use crate::swift::utils::check_header_value;
use http::Method;
use std::sync::{Mutex, PoisonError};
use typed_builder::TypedBuilder;

/// Generic request against the storage URL of an authenticated session.
#[derive(Debug, TypedBuilder)]
pub struct SwiftRequest {
    #[builder(!default)] // force required
    pub(crate) session: SwiftSession,

    #[builder(!default)] // force required
    pub(crate) method: Method,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    pub(crate) headers: Multimap,

    /// Taken by [`SwiftRequest::execute`] once the body has been sent. The
    /// lock keeps the request `Sync` while the body holds a stream.
    #[builder(default, setter(transform = |body: ObjectContent| Mutex::new(Some(body))))]
    body: Mutex<Option<ObjectContent>>,
}

impl SwiftRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    /// Headers set by the operation. The auth token is added at send time
    /// and is not part of this map.
    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    /// Execute the request, returning the response. Only used in [`SwiftApi::send()`]
    /// and the streaming download.
    pub(crate) async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        let body = self
            .body
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.session
            .execute(
                &self.method,
                self.bucket.as_deref(),
                self.object.as_deref(),
                &self.query_params,
                &self.headers,
                body,
            )
            .await
    }
}

/// Converts a request builder into a concrete [`SwiftRequest`].
pub trait ToSwiftRequest: Sized {
    /// Consumes this request builder and returns a [`SwiftRequest`].
    ///
    /// Argument checks (container and object names, list limits, byte
    /// ranges) happen here, before anything is sent.
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr>;
}

/// Common interface of all Swift API request builders.
pub trait SwiftApi: ToSwiftRequest {
    /// The response type associated with this request builder.
    type SwiftResponse: FromSwiftResponse;

    /// Sends the request and returns the corresponding typed response.
    ///
    /// Exactly one HTTP round trip is made; nothing is retried.
    fn send(self) -> impl std::future::Future<Output = Result<Self::SwiftResponse, Error>> + Send
    where
        Self: Sized + Send,
    {
        async {
            let mut request: SwiftRequest = self.to_swift_request()?;
            let response: Result<reqwest::Response, Error> = request.execute().await;
            Self::SwiftResponse::from_swift_response(request, response).await
        }
    }
}

/// Converts HTTP responses into typed Swift responses.
///
/// Implementations decide how the body is interpreted; the HTTP status code
/// is recorded but never used to decide success.
#[async_trait::async_trait]
pub trait FromSwiftResponse: Sized {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Container access control list.
///
/// Each list is sent comma-joined in the given order. [`Acl::ALL_USERS`]
/// grants access to everyone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Acl {
    pub read_users: Vec<String>,
    pub write_users: Vec<String>,
}

impl Acl {
    /// Grantee that matches every user.
    pub const ALL_USERS: &'static str = "*";

    pub fn new<R, W>(read_users: R, write_users: W) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            read_users: read_users.into_iter().map(Into::into).collect(),
            write_users: write_users.into_iter().map(Into::into).collect(),
        }
    }

    /// ACL granting read access only.
    pub fn read_only<R>(read_users: R) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self::new(read_users, Vec::<String>::new())
    }

    /// Value of the `X-Container-Read` header, `None` when nobody is granted.
    pub fn read_header(&self) -> Option<String> {
        join_users(&self.read_users)
    }

    /// Value of the `X-Container-Write` header, `None` when nobody is granted.
    pub fn write_header(&self) -> Option<String> {
        join_users(&self.write_users)
    }

    /// Adds the non-empty ACL headers, rejecting grantees that cannot be
    /// sent in a header value.
    pub(crate) fn apply(&self, headers: &mut Multimap) -> Result<(), ValidationErr> {
        if let Some(v) = self.read_header() {
            check_header_value(X_CONTAINER_READ, &v)?;
            headers.add(X_CONTAINER_READ, v);
        }
        if let Some(v) = self.write_header() {
            check_header_value(X_CONTAINER_WRITE, &v)?;
            headers.add(X_CONTAINER_WRITE, v);
        }
        Ok(())
    }
}

fn join_users(users: &[String]) -> Option<String> {
    if users.is_empty() {
        None
    } else {
        Some(users.join(","))
    }
}

/// Inclusive byte range of an object, sent as `Range: bytes=start-end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn validate(&self) -> Result<(), ValidationErr> {
        if self.start > self.end {
            return Err(ValidationErr::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

impl From<(u64, u64)> for ByteRange {
    fn from((start, end): (u64, u64)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acl_read_only() {
        let acl = Acl::read_only(["ping:swift"]);
        let mut headers = Multimap::new();
        acl.apply(&mut headers).unwrap();
        assert_eq!(
            headers.get(X_CONTAINER_READ).map(String::as_str),
            Some("ping:swift")
        );
        assert!(!headers.contains_key(X_CONTAINER_WRITE));
    }

    #[test]
    fn test_acl_write_uses_write_users() {
        let acl = Acl::new(["ping:swift", "pong:swift"], [Acl::ALL_USERS]);
        assert_eq!(acl.read_header().as_deref(), Some("ping:swift,pong:swift"));
        assert_eq!(acl.write_header().as_deref(), Some("*"));
    }

    #[test]
    fn test_acl_empty_sets_no_headers() {
        let mut headers = Multimap::new();
        Acl::default().apply(&mut headers).unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_acl_rejects_line_breaks() {
        let mut headers = Multimap::new();
        let err = Acl::new(["ping:swift"], ["a\nb"])
            .apply(&mut headers)
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationErr::InvalidHeaderValue { ref name, .. } if name == X_CONTAINER_WRITE
        ));
    }

    #[test]
    fn test_requests_and_responses_are_send_sync() {
        use crate::swift::response::*;

        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SwiftRequest>();
        assert_send_sync::<CreateBucketResponse>();
        assert_send_sync::<ListBucketsResponse>();
        assert_send_sync::<ListObjectsResponse>();
        assert_send_sync::<RemoveBucketResponse>();
        assert_send_sync::<UpdateBucketAclsResponse>();
        assert_send_sync::<CopyObjectResponse>();
        assert_send_sync::<DownloadObjectResponse>();
        assert_send_sync::<GetObjectResponse>();
        assert_send_sync::<PutObjectResponse>();
        assert_send_sync::<RemoveObjectResponse>();
    }

    #[test]
    fn test_byte_range() {
        let range = ByteRange::from((0, 5));
        assert_eq!(range.header_value(), "bytes=0-5");
        assert!(range.validate().is_ok());
        assert!(ByteRange::new(6, 5).validate().is_err());
    }
}
