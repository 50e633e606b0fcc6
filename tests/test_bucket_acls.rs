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

use http::Method;
use rgw_swift::swift::error::{Error, ServiceError, ValidationErr};
use rgw_swift::swift::header_constants::{X_CONTAINER_READ, X_CONTAINER_WRITE};
use rgw_swift::swift::response::{CreateBucketResponse, UpdateBucketAclsResponse};
use rgw_swift::swift::response_traits::{HasBucket, HasSwiftFields};
use rgw_swift::swift::types::{Acl, SwiftApi};
use rgw_swift_common::test_context::TestContext;
use rgw_swift_common::utils::rand_bucket_name;

#[rgw_swift_macros::test(no_bucket)]
async fn create_bucket_with_read_acl(ctx: TestContext) {
    let bucket_name = rand_bucket_name();

    let resp: CreateBucketResponse = ctx
        .session
        .create_bucket(&bucket_name)
        .acl(Acl::read_only(["ping:swift"]))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);

    let headers = resp.request().headers();
    assert_eq!(
        headers.get(X_CONTAINER_READ).map(String::as_str),
        Some("ping:swift")
    );
    assert!(!headers.contains_key(X_CONTAINER_WRITE));

    if let Some(mock) = ctx.mock() {
        let req = mock.last_request().unwrap();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.header("x-container-read"), Some("ping:swift"));
        assert_eq!(req.header("x-container-write"), None);
        assert_eq!(
            mock.bucket_acl(&bucket_name),
            Some((Some("ping:swift".to_string()), None))
        );
    }

    ctx.session
        .remove_bucket(&bucket_name)
        .build()
        .send()
        .await
        .unwrap();
}

#[rgw_swift_macros::test]
async fn update_bucket_acls(ctx: TestContext, bucket_name: String) {
    let acl = Acl::new(["ping:swift", "pong:swift"], [Acl::ALL_USERS]);

    let resp: UpdateBucketAclsResponse = ctx
        .session
        .update_bucket_acls(&bucket_name, acl)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), bucket_name);
    assert_eq!(resp.request().method(), &Method::POST);

    if let Some(mock) = ctx.mock() {
        let req = mock.last_request().unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.header("x-container-read"), Some("ping:swift,pong:swift"));
        assert_eq!(req.header("x-container-write"), Some("*"));
        assert_eq!(
            mock.bucket_acl(&bucket_name),
            Some((
                Some("ping:swift,pong:swift".to_string()),
                Some("*".to_string())
            ))
        );
    }
}

#[rgw_swift_macros::test(no_bucket)]
async fn update_acls_of_missing_bucket(ctx: TestContext) {
    let Some(_) = ctx.mock() else {
        return;
    };

    let resp = ctx
        .session
        .update_bucket_acls(rand_bucket_name(), Acl::read_only([Acl::ALL_USERS]))
        .build()
        .send()
        .await;
    match resp {
        Err(Error::Service(ServiceError::ResponseBody(body))) => {
            assert_eq!(body.as_ref(), b"NoSuchBucket")
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[rgw_swift_macros::test]
async fn acl_grantee_with_line_break_is_rejected(ctx: TestContext, bucket_name: String) {
    let sent_before = ctx.mock().map(|m| m.requests().len());

    let resp = ctx
        .session
        .update_bucket_acls(&bucket_name, Acl::read_only(["a\nb"]))
        .build()
        .send()
        .await;
    assert!(matches!(
        resp,
        Err(Error::Validation(ValidationErr::InvalidHeaderValue { .. }))
    ));

    let resp = ctx
        .session
        .create_bucket(rand_bucket_name())
        .acl(Acl::new(["ping:swift"], ["x\r\ny"]))
        .build()
        .send()
        .await;
    assert!(matches!(
        resp,
        Err(Error::Validation(ValidationErr::InvalidHeaderValue { .. }))
    ));
    assert_eq!(ctx.mock().map(|m| m.requests().len()), sent_before);
}
