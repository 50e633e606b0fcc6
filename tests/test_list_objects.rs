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

use rgw_swift::swift::builders::MAX_LIST_LIMIT;
use rgw_swift::swift::error::{Error, ServiceError, ValidationErr};
use rgw_swift::swift::response::ListObjectsResponse;
use rgw_swift::swift::response_traits::HasBucket;
use rgw_swift::swift::types::SwiftApi;
use rgw_swift_common::test_context::TestContext;

const NAMES: [&str; 5] = ["a", "b", "photos/1", "photos/2", "photos/x/3"];

async fn put_names(ctx: &TestContext, bucket_name: &str) {
    for name in NAMES {
        ctx.session
            .put_object(bucket_name, name, name.to_string())
            .build()
            .send()
            .await
            .unwrap();
    }
}

#[rgw_swift_macros::test]
async fn list_objects(ctx: TestContext, bucket_name: String) {
    put_names(&ctx, &bucket_name).await;

    let resp: ListObjectsResponse = ctx
        .session
        .list_objects(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);
    assert_eq!(resp.objects(), NAMES);
}

#[rgw_swift_macros::test]
async fn list_objects_with_parameters(ctx: TestContext, bucket_name: String) {
    put_names(&ctx, &bucket_name).await;

    let resp = ctx
        .session
        .list_objects(&bucket_name)
        .prefix("photos/")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.objects(), ["photos/1", "photos/2", "photos/x/3"]);

    let resp = ctx
        .session
        .list_objects(&bucket_name)
        .path("photos")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.objects(), ["photos/1", "photos/2"]);

    let resp = ctx
        .session
        .list_objects(&bucket_name)
        .marker("b")
        .limit(2)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.objects(), ["photos/1", "photos/2"]);

    if let Some(mock) = ctx.mock() {
        let query = mock.last_request().unwrap().query.unwrap();
        assert!(query.contains("marker=b"));
        assert!(query.contains("limit=2"));
        assert!(!query.contains("prefix"));
    }
}

#[rgw_swift_macros::test]
async fn list_objects_empty_values_not_sent(ctx: TestContext, bucket_name: String) {
    put_names(&ctx, &bucket_name).await;

    let resp = ctx
        .session
        .list_objects(&bucket_name)
        .prefix("")
        .marker("")
        .path("")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.objects(), NAMES);

    if let Some(mock) = ctx.mock() {
        let query = mock.last_request().unwrap().query.unwrap();
        assert_eq!(query, "limit=1000");
    }
}

#[rgw_swift_macros::test]
async fn list_objects_empty_is_error(ctx: TestContext, bucket_name: String) {
    let err = ctx
        .session
        .list_objects(&bucket_name)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Service(ServiceError::EmptyListing(_))
    ));
    assert_eq!(err.to_string(), "object list is empty");
}

#[rgw_swift_macros::test]
async fn list_objects_limit_is_validated(ctx: TestContext, bucket_name: String) {
    let sent_before = ctx.mock().map(|m| m.requests().len());

    for limit in [0, MAX_LIST_LIMIT + 1] {
        let resp = ctx
            .session
            .list_objects(&bucket_name)
            .limit(limit)
            .build()
            .send()
            .await;
        assert!(matches!(
            resp,
            Err(Error::Validation(ValidationErr::InvalidListLimit { .. }))
        ));
    }

    // rejected before anything is sent
    assert_eq!(ctx.mock().map(|m| m.requests().len()), sent_before);
}
