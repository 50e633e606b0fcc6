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
use crate::swift::header_constants::{LIMIT, MARKER, PATH, PREFIX};
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::response::ListObjectsResponse;
use crate::swift::session::SwiftSession;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_bucket_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Number of names requested when no limit is given.
pub const DEFAULT_LIST_LIMIT: u32 = 1000;

/// Largest page the gateway serves in one listing.
pub const MAX_LIST_LIMIT: u32 = 10000;

/// Argument builder for listing the object names of a container.
///
/// A single listing call is made; `marker` can be used by the caller to
/// continue after the last name of a previous page. Empty `prefix`, `marker`
/// and `path` values are not sent.
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
/// let resp = session
///     .list_objects("via-bucket")
///     .prefix("photos/")
///     .limit(100)
///     .build()
///     .send()
///     .await?;
/// for name in resp.objects() {
///     println!("{name}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListObjects {
    #[builder(!default)]
    session: SwiftSession,
    #[builder(setter(into))]
    bucket: String,
    /// Only names starting with this prefix are returned.
    #[builder(default, setter(into, strip_option))]
    prefix: Option<String>,
    /// Only names sorting after this one are returned.
    #[builder(default, setter(into, strip_option))]
    marker: Option<String>,
    /// Only names directly under this pseudo-directory are returned.
    #[builder(default, setter(into, strip_option))]
    path: Option<String>,
    #[builder(default = DEFAULT_LIST_LIMIT)]
    limit: u32,
}

impl SwiftApi for ListObjects {
    type SwiftResponse = ListObjectsResponse;
}

/// Builder type for ListObjects
pub type ListObjectsBldr = ListObjectsBuilder<((SwiftSession,), (String,), (), (), (), ())>;

impl ToSwiftRequest for ListObjects {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        if self.limit == 0 || self.limit > MAX_LIST_LIMIT {
            return Err(ValidationErr::InvalidListLimit {
                got: self.limit,
                max: MAX_LIST_LIMIT,
            });
        }

        let mut query_params = Multimap::new();
        query_params.add_non_empty(PREFIX, self.prefix);
        query_params.add_non_empty(MARKER, self.marker);
        query_params.add_non_empty(PATH, self.path);
        query_params.add(LIMIT, self.limit.to_string());

        Ok(SwiftRequest::builder()
            .session(self.session)
            .method(Method::GET)
            .bucket(Some(self.bucket))
            .query_params(query_params)
            .build())
    }
}
