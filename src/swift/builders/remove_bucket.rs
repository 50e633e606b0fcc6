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
use crate::swift::response::RemoveBucketResponse;
use crate::swift::session::SwiftSession;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_bucket_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for deleting a container. The gateway refuses to delete
/// a container that still holds objects.
#[derive(Clone, Debug, TypedBuilder)]
pub struct RemoveBucket {
    #[builder(!default)]
    session: SwiftSession,
    #[builder(setter(into))]
    bucket: String,
}

impl SwiftApi for RemoveBucket {
    type SwiftResponse = RemoveBucketResponse;
}

/// Builder type for RemoveBucket
pub type RemoveBucketBldr = RemoveBucketBuilder<((SwiftSession,), (String,))>;

impl ToSwiftRequest for RemoveBucket {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        Ok(SwiftRequest::builder()
            .session(self.session)
            .method(Method::DELETE)
            .bucket(Some(self.bucket))
            .build())
    }
}
