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

use rgw_swift::swift::error::{Error, ServiceError, ValidationErr};
use rgw_swift::swift::response::{CreateBucketResponse, RemoveBucketResponse};
use rgw_swift::swift::response_traits::HasBucket;
use rgw_swift::swift::types::SwiftApi;
use rgw_swift_common::cleanup_guard::CleanupGuard;
use rgw_swift_common::test_context::TestContext;
use rgw_swift_common::utils::{rand_bucket_name, rand_object_name};

#[rgw_swift_macros::test(no_bucket)]
async fn bucket_create(ctx: TestContext) {
    let bucket_name = rand_bucket_name();
    let guard = CleanupGuard::new(ctx.session.clone(), &bucket_name);

    let resp: CreateBucketResponse = ctx
        .session
        .create_bucket(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);

    // creating an existing container again is accepted
    let resp: CreateBucketResponse = ctx
        .session
        .create_bucket(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);

    let names = ctx.session.list_buckets().build().send().await.unwrap();
    assert!(names.buckets().contains(&bucket_name));

    guard.cleanup().await;
}

#[rgw_swift_macros::test(no_bucket)]
async fn bucket_remove(ctx: TestContext) {
    let bucket_name = rand_bucket_name();

    // removing a container that does not exist reports the service text
    let resp: Result<RemoveBucketResponse, Error> =
        ctx.session.remove_bucket(&bucket_name).build().send().await;
    match resp {
        Ok(_) => panic!("Bucket does not exist, but was removed"),
        Err(Error::Service(ServiceError::ResponseBody(body))) => {
            if ctx.mock().is_some() {
                assert_eq!(body.as_ref(), b"NoSuchBucket");
            }
        }
        Err(e) => panic!("Unexpected error: {e:?}"),
    }

    ctx.session
        .create_bucket(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();

    let resp: RemoveBucketResponse = ctx
        .session
        .remove_bucket(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);
}

#[rgw_swift_macros::test]
async fn bucket_remove_not_empty(ctx: TestContext, bucket_name: String) {
    ctx.session
        .put_object(&bucket_name, rand_object_name(), "data")
        .build()
        .send()
        .await
        .unwrap();

    let err = ctx
        .session
        .remove_bucket(&bucket_name)
        .build()
        .send()
        .await
        .unwrap_err();
    match err {
        Error::Service(ServiceError::ResponseBody(ref body)) => {
            if ctx.mock().is_some() {
                // the body is the error, byte for byte
                assert_eq!(body.as_ref(), b"BucketNotEmpty");
                assert_eq!(err.to_string(), "BucketNotEmpty");
            }
        }
        e => panic!("Unexpected error: {e:?}"),
    }
}

#[rgw_swift_macros::test(no_bucket)]
async fn bucket_remove_and_purge(ctx: TestContext) {
    let bucket_name = rand_bucket_name();
    ctx.session
        .create_bucket(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
    for i in 0..3 {
        ctx.session
            .put_object(&bucket_name, format!("dir/object-{i}"), "data")
            .build()
            .send()
            .await
            .unwrap();
    }

    let resp = ctx
        .session
        .remove_and_purge_bucket(&bucket_name)
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);

    match ctx.session.list_buckets().build().send().await {
        Ok(resp) => assert!(!resp.buckets().contains(&bucket_name)),
        Err(Error::Service(ServiceError::EmptyListing(_))) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[rgw_swift_macros::test(no_bucket)]
async fn bucket_name_is_validated(ctx: TestContext) {
    for name in ["", "a/b"] {
        let resp = ctx.session.create_bucket(name).build().send().await;
        assert!(matches!(
            resp,
            Err(Error::Validation(ValidationErr::InvalidBucketName(_)))
        ));
    }

    let resp = ctx.session.remove_bucket("x".repeat(257)).build().send().await;
    assert!(matches!(
        resp,
        Err(Error::Validation(ValidationErr::InvalidBucketName(_)))
    ));
}

/// `.` and `..` would be collapsed out of the URL path and address the
/// account instead of a container.
#[rgw_swift_macros::test(no_bucket)]
async fn dot_bucket_names_are_rejected(ctx: TestContext) {
    let sent_before = ctx.mock().map(|m| m.requests().len());

    for name in [".", "..", "%2e%2E"] {
        let resp = ctx.session.remove_bucket(name).build().send().await;
        assert!(
            matches!(resp, Err(Error::Validation(ValidationErr::InvalidBucketName(_)))),
            "{name} should be rejected"
        );
        let resp = ctx.session.create_bucket(name).build().send().await;
        assert!(matches!(
            resp,
            Err(Error::Validation(ValidationErr::InvalidBucketName(_)))
        ));
    }
    assert_eq!(ctx.mock().map(|m| m.requests().len()), sent_before);
}
