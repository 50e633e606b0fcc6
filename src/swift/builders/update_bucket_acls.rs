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
use crate::swift::multimap_ext::Multimap;
use crate::swift::response::UpdateBucketAclsResponse;
use crate::swift::session::SwiftSession;
use crate::swift::types::{Acl, SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_bucket_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for replacing the ACL of an existing container.
///
/// Sent as `POST` with the same `X-Container-Read` / `X-Container-Write`
/// encoding as container creation. An empty grantee list sends no header,
/// which leaves that side of the ACL untouched on the gateway.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateBucketAcls {
    #[builder(!default)]
    session: SwiftSession,
    #[builder(setter(into))]
    bucket: String,
    #[builder(!default)]
    acl: Acl,
}

impl SwiftApi for UpdateBucketAcls {
    type SwiftResponse = UpdateBucketAclsResponse;
}

/// Builder type for UpdateBucketAcls
pub type UpdateBucketAclsBldr = UpdateBucketAclsBuilder<((SwiftSession,), (String,), (Acl,))>;

impl ToSwiftRequest for UpdateBucketAcls {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let mut headers = Multimap::new();
        self.acl.apply(&mut headers)?;

        Ok(SwiftRequest::builder()
            .session(self.session)
            .method(Method::POST)
            .bucket(Some(self.bucket))
            .headers(headers)
            .build())
    }
}
