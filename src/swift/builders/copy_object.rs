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

use crate::swift::error::ValidationErr;
use crate::swift::header_constants::X_COPY_FROM;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::response::CopyObjectResponse;
use crate::swift::session::SwiftSession;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_bucket_name, check_object_name, url_encode, urlencode_object_key};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for a server-side copy.
///
/// Sent as a body-less `PUT` to the destination with
/// `X-Copy-From: {src_bucket}/{src_object}`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CopyObject {
    #[builder(!default)]
    session: SwiftSession,
    #[builder(setter(into))]
    src_bucket: String,
    #[builder(setter(into))]
    src_object: String,
    #[builder(setter(into))]
    bucket: String,
    #[builder(setter(into))]
    object: String,
}

impl SwiftApi for CopyObject {
    type SwiftResponse = CopyObjectResponse;
}

/// Builder type for CopyObject
pub type CopyObjectBldr =
    CopyObjectBuilder<((SwiftSession,), (String,), (String,), (String,), (String,))>;

impl ToSwiftRequest for CopyObject {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_bucket_name(&self.src_bucket)?;
        check_object_name(&self.src_object)?;
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let mut headers = Multimap::new();
        headers.add(
            X_COPY_FROM,
            format!(
                "{}/{}",
                url_encode(&self.src_bucket),
                urlencode_object_key(&self.src_object)
            ),
        );

        Ok(SwiftRequest::builder()
            .session(self.session)
            .method(Method::PUT)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .headers(headers)
            .build())
    }
}
