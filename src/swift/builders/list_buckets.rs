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
use crate::swift::response::ListBucketsResponse;
use crate::swift::session::SwiftSession;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for listing the containers of the account.
///
/// Issues `GET {storage_url}`; the plain-text response holds one container
/// name per line.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListBuckets {
    #[builder(!default)]
    session: SwiftSession,
}

impl SwiftApi for ListBuckets {
    type SwiftResponse = ListBucketsResponse;
}

/// Builder type for ListBuckets
pub type ListBucketsBldr = ListBucketsBuilder<((SwiftSession,),)>;

impl ToSwiftRequest for ListBuckets {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        Ok(SwiftRequest::builder()
            .session(self.session)
            .method(Method::GET)
            .build())
    }
}
