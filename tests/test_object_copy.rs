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
use rgw_swift::swift::response::CopyObjectResponse;
use rgw_swift::swift::response_traits::{HasBucket, HasObject};
use rgw_swift::swift::types::SwiftApi;
use rgw_swift_common::test_context::TestContext;
use rgw_swift_common::utils::{rand_bucket_name, rand_object_name};

#[rgw_swift_macros::test]
async fn copy_object(ctx: TestContext, bucket_name: String) {
    let src_object_name = format!("src dir/{}", rand_object_name());
    ctx.session
        .put_object(&bucket_name, &src_object_name, "copy me")
        .build()
        .send()
        .await
        .unwrap();

    let object_name = rand_object_name();
    let resp: CopyObjectResponse = ctx
        .session
        .copy_object(&bucket_name, &src_object_name, &bucket_name, &object_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);
    assert_eq!(resp.object(), object_name);
    assert_eq!(
        resp.copied_from(),
        format!("{bucket_name}/{}", src_object_name.replace(' ', "%20"))
    );

    let resp = ctx
        .session
        .get_object(&bucket_name, &object_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.content().as_ref(), b"copy me");
}

#[rgw_swift_macros::test]
async fn copy_object_across_buckets(ctx: TestContext, bucket_name: String) {
    let dst_bucket = rand_bucket_name();
    ctx.session
        .create_bucket(&dst_bucket)
        .build()
        .send()
        .await
        .unwrap();

    let object_name = rand_object_name();
    ctx.session
        .put_object(&bucket_name, &object_name, "across")
        .build()
        .send()
        .await
        .unwrap();
    ctx.session
        .copy_object(&bucket_name, &object_name, &dst_bucket, &object_name)
        .build()
        .send()
        .await
        .unwrap();

    let resp = ctx
        .session
        .get_object(&dst_bucket, &object_name)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.content().as_ref(), b"across");

    ctx.session.remove_and_purge_bucket(&dst_bucket).await.unwrap();
}

#[rgw_swift_macros::test]
async fn copy_missing_object(ctx: TestContext, bucket_name: String) {
    let resp = ctx
        .session
        .copy_object(&bucket_name, rand_object_name(), &bucket_name, rand_object_name())
        .build()
        .send()
        .await;
    match resp {
        Err(Error::Service(ServiceError::ResponseBody(body))) => {
            if ctx.mock().is_some() {
                assert_eq!(body.as_ref(), b"NoSuchKey");
            }
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}
