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

use rgw_swift::swift::error::Error;
use rgw_swift::swift::response::{DownloadObjectResponse, PutObjectResponse};
use rgw_swift::swift::response_traits::{HasObject, HasSwiftFields};
use rgw_swift::swift::types::SwiftApi;
use rgw_swift_common::test_context::TestContext;
use rgw_swift_common::utils::{rand_object_name, rand_temp_path};
use std::path::Path;

fn payload(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

async fn upload_download(ctx: &TestContext, bucket_name: &str, size: usize) {
    let object_name = rand_object_name();
    let upload_path = rand_temp_path("rgw-swift-upload");
    let download_path = rand_temp_path("rgw-swift-download");
    let data = payload(size);
    std::fs::write(&upload_path, &data).unwrap();

    let resp: PutObjectResponse = ctx
        .session
        .put_object(bucket_name, &object_name, upload_path.as_path())
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.object(), object_name);

    if let Some(mock) = ctx.mock() {
        let req = mock.last_request().unwrap();
        assert_eq!(req.header("content-length"), Some(size.to_string().as_str()));
        assert_eq!(req.body.len(), size);
    }

    let resp: DownloadObjectResponse = ctx
        .session
        .download_object(bucket_name, &object_name, &download_path)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.object(), object_name);
    assert_eq!(resp.path(), download_path.as_path());
    assert_eq!(resp.bytes_written(), size as u64);
    assert!(resp.body().is_empty());

    assert_eq!(std::fs::read(&download_path).unwrap(), data);

    std::fs::remove_file(&upload_path).unwrap();
    std::fs::remove_file(&download_path).unwrap();
}

#[rgw_swift_macros::test]
async fn upload_download_small_object(ctx: TestContext, bucket_name: String) {
    upload_download(&ctx, &bucket_name, 16).await;
}

#[rgw_swift_macros::test]
async fn upload_download_object(ctx: TestContext, bucket_name: String) {
    upload_download(&ctx, &bucket_name, 100 * 1024 + 7).await;
}

#[rgw_swift_macros::test]
async fn upload_download_empty_object(ctx: TestContext, bucket_name: String) {
    upload_download(&ctx, &bucket_name, 0).await;
}

#[rgw_swift_macros::test]
async fn download_truncates_existing_file(ctx: TestContext, bucket_name: String) {
    let object_name = rand_object_name();
    ctx.session
        .put_object(&bucket_name, &object_name, "short")
        .build()
        .send()
        .await
        .unwrap();

    let path = rand_temp_path("rgw-swift-download");
    std::fs::write(&path, "a much longer previous content").unwrap();

    ctx.session
        .download_object(&bucket_name, &object_name, &path)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"short");
    std::fs::remove_file(&path).unwrap();
}

#[rgw_swift_macros::test]
async fn download_into_missing_directory(ctx: TestContext, bucket_name: String) {
    let sent_before = ctx.mock().map(|m| m.requests().len());

    let resp = ctx
        .session
        .download_object(
            &bucket_name,
            rand_object_name(),
            Path::new("/nonexistent/rgw-swift/download"),
        )
        .build()
        .send()
        .await;
    assert!(matches!(resp, Err(Error::Io(_))));

    // the target is created before the request is made
    assert_eq!(ctx.mock().map(|m| m.requests().len()), sent_before);
}
