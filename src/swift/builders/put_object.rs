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
use crate::swift::object_content::ObjectContent;
use crate::swift::response::PutObjectResponse;
use crate::swift::session::SwiftSession;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_bucket_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for uploading an object in a single `PUT`.
///
/// The content may be in memory, a local file or a byte stream; files are
/// streamed in chunks and opened only when the request is sent.
#[derive(Debug, TypedBuilder)]
pub struct PutObject {
    #[builder(!default)]
    session: SwiftSession,
    #[builder(setter(into))]
    bucket: String,
    #[builder(setter(into))]
    object: String,
    #[builder(setter(into))]
    content: ObjectContent,
}

impl SwiftApi for PutObject {
    type SwiftResponse = PutObjectResponse;
}

/// Builder type for PutObject
pub type PutObjectBldr =
    PutObjectBuilder<((SwiftSession,), (String,), (String,), (ObjectContent,))>;

impl ToSwiftRequest for PutObject {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        Ok(SwiftRequest::builder()
            .session(self.session)
            .method(Method::PUT)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .body(self.content)
            .build())
    }
}
