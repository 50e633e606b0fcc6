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
use crate::swift::response::CreateBucketResponse;
use crate::swift::session::SwiftSession;
use crate::swift::types::{Acl, SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_bucket_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for creating a container, optionally with an ACL.
///
/// # Example
///
/// ```no_run
/// use rgw_swift::swift::{SwiftClient, http::BaseUrl, types::{Acl, SwiftApi}};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let base_url: BaseUrl = "http://127.0.0.1:7480".parse()?;
/// let session = SwiftClient::new(base_url, None)?
///     .authenticate("ping:swift", "secret")
///     .await?;
///
/// session
///     .create_bucket("via-bucket")
///     .acl(Acl::read_only(["ping:swift"]))
///     .build()
///     .send()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)]
    session: SwiftSession,
    #[builder(setter(into))]
    bucket: String,
    #[builder(default, setter(strip_option))]
    acl: Option<Acl>,
}

impl SwiftApi for CreateBucket {
    type SwiftResponse = CreateBucketResponse;
}

/// Builder type for CreateBucket
pub type CreateBucketBldr = CreateBucketBuilder<((SwiftSession,), (String,), ())>;

impl ToSwiftRequest for CreateBucket {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let mut headers = Multimap::new();
        if let Some(acl) = &self.acl {
            acl.apply(&mut headers)?;
        }

        Ok(SwiftRequest::builder()
            .session(self.session)
            .method(Method::PUT)
            .bucket(Some(self.bucket))
            .headers(headers)
            .build())
    }
}
