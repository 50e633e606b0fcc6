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
use crate::swift::header_constants::RANGE;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::response::GetObjectResponse;
use crate::swift::session::SwiftSession;
use crate::swift::types::{ByteRange, SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_bucket_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for reading an object, whole or by inclusive byte range.
///
/// The whole body is read into memory.
///
/// # Example
///
/// ```no_run
/// use rgw_swift::swift::{SwiftClient, http::BaseUrl, types::SwiftApi};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let base_url: BaseUrl = "http://127.0.0.1:7480".parse()?;
/// let session = SwiftClient::new(base_url, None)?
///     .authenticate("ping:swift", "secret")
///     .await?;
///
/// // first six bytes
/// let resp = session
///     .get_object("via-bucket", "hello.txt")
///     .range(0, 5)
///     .build()
///     .send()
///     .await?;
/// println!("{:?}", resp.content());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetObject {
    #[builder(!default)]
    session: SwiftSession,
    #[builder(setter(into))]
    bucket: String,
    #[builder(setter(into))]
    object: String,
    #[builder(default, setter(transform = |start: u64, end: u64| Some(ByteRange::new(start, end))))]
    range: Option<ByteRange>,
}

impl SwiftApi for GetObject {
    type SwiftResponse = GetObjectResponse;
}

/// Builder type for GetObject
pub type GetObjectBldr = GetObjectBuilder<((SwiftSession,), (String,), (String,), ())>;

impl ToSwiftRequest for GetObject {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let mut headers = Multimap::new();
        if let Some(range) = self.range {
            range.validate()?;
            headers.add(RANGE, range.header_value());
        }

        Ok(SwiftRequest::builder()
            .session(self.session)
            .method(Method::GET)
            .bucket(Some(self.bucket))
            .object(Some(self.object))
            .headers(headers)
            .build())
    }
}
