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

use rgw_swift::swift::error::{Error, ServiceError};
use rgw_swift::swift::response::ListBucketsResponse;
use rgw_swift::swift::types::SwiftApi;
use rgw_swift_common::mock_server::CannedResponse;
use rgw_swift_common::test_context::TestContext;

#[rgw_swift_macros::test]
async fn list_buckets(ctx: TestContext, bucket_name: String) {
    let resp: ListBucketsResponse = ctx.session.list_buckets().build().send().await.unwrap();
    assert!(resp.buckets().contains(&bucket_name));
}

#[rgw_swift_macros::test(no_bucket)]
async fn list_buckets_splits_lines(ctx: TestContext) {
    let Some(mock) = ctx.mock() else {
        return;
    };

    mock.push_response(CannedResponse::new(200).body("a\nb\nc"));
    let resp = ctx.session.list_buckets().build().send().await.unwrap();
    assert_eq!(resp.buckets(), ["a", "b", "c"]);

    mock.push_response(CannedResponse::new(200).body("a\nb\nc\n"));
    let resp = ctx.session.list_buckets().build().send().await.unwrap();
    assert_eq!(resp.buckets(), ["a", "b", "c"]);
}

#[rgw_swift_macros::test(no_bucket)]
async fn list_buckets_empty_is_error(ctx: TestContext) {
    let Some(mock) = ctx.mock() else {
        return;
    };

    mock.push_response(CannedResponse::new(204));
    let err = ctx.session.list_buckets().build().send().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Service(ServiceError::EmptyListing(_))
    ));
    assert_eq!(err.to_string(), "bucket list is empty");
}
