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

use rgw_swift::swift::SwiftClient;
use rgw_swift::swift::authenticate;
use rgw_swift::swift::error::{Error, ValidationErr};
use rgw_swift::swift::http::BaseUrl;
use rgw_swift_common::mock_server::{DEFAULT_KEY, DEFAULT_USER, MockSwiftServer};
use rgw_swift_common::utils::rand_temp_path;
use std::path::Path;

/// Self-signed CA kept next to the tests.
const TEST_CA_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/public.crt");

#[tokio::test]
async fn invalid_server_address() {
    for address in ["ftp://rgw.example.net", "http://rgw.example.net/?a=b", "http://"] {
        let resp = authenticate(address, None, "test:tester", "testing").await;
        assert!(
            matches!(resp, Err(Error::Validation(_))),
            "{address} should be rejected"
        );
    }
}

#[tokio::test]
async fn missing_ca_bundle() {
    let resp = authenticate(
        "https://127.0.0.1:7480",
        Some(Path::new("/nonexistent/rgw-swift/ca.pem")),
        "test:tester",
        "testing",
    )
    .await;
    assert!(matches!(
        resp,
        Err(Error::Validation(ValidationErr::CertFileRead { .. }))
    ));
}

#[tokio::test]
async fn unparsable_ca_bundle() {
    let path = rand_temp_path("rgw-swift-ca");
    std::fs::write(&path, "-----BEGIN CERTIFICATE-----\nbm90IGEgY2VydA==\n-----END CERTIFICATE-----\n")
        .unwrap();

    let resp = authenticate("https://127.0.0.1:7480", Some(&path), "test:tester", "testing").await;
    std::fs::remove_file(&path).unwrap();
    // native TLS rejects the DER when parsing; rustls only when building
    assert!(matches!(
        resp,
        Err(Error::Validation(
            ValidationErr::InvalidCertificate { .. } | ValidationErr::HttpClient(_)
        ))
    ));
}

#[tokio::test]
async fn unreachable_gateway_is_network_error() {
    // nothing listens on the discard port
    let base_url: BaseUrl = "http://127.0.0.1:9".parse().unwrap();
    let client = SwiftClient::new(base_url, None).unwrap();
    let resp = client.authenticate("test:tester", "testing").await;
    assert!(matches!(resp, Err(Error::Network(_))));
}

#[test]
fn valid_ca_bundle_builds_client() {
    let base_url: BaseUrl = "https://127.0.0.1:7480".parse().unwrap();
    let client = SwiftClient::new(base_url, Some(Path::new(TEST_CA_FILE))).unwrap();
    assert_eq!(client.base_url().auth_url(), "https://127.0.0.1:7480/auth");
}

#[tokio::test]
async fn tls_handshake_with_custom_ca_is_network_error() {
    // the mock only speaks plain HTTP, so the handshake cannot complete
    let mock = MockSwiftServer::start().await.unwrap();
    let base_url: BaseUrl = mock.base_url().replace("http://", "https://").parse().unwrap();
    let client = SwiftClient::new(base_url, Some(Path::new(TEST_CA_FILE))).unwrap();

    let resp = client.authenticate(DEFAULT_USER, DEFAULT_KEY).await;
    assert!(matches!(resp, Err(Error::Network(_))));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn user_agent_carries_app_info() {
    let mock = MockSwiftServer::start().await.unwrap();
    let base_url: BaseUrl = mock.base_url().parse().unwrap();
    let client = SwiftClient::builder(base_url)
        .app_info(Some(("demo".into(), "1.0".into())))
        .build()
        .unwrap();
    client.authenticate(DEFAULT_USER, DEFAULT_KEY).await.unwrap();

    let req = mock.last_request().unwrap();
    let user_agent = req.header("user-agent").unwrap();
    assert!(user_agent.starts_with("RGW-Swift ("), "{user_agent}");
    assert!(user_agent.contains(" rgw-swift/"), "{user_agent}");
    assert!(user_agent.ends_with(" demo/1.0"), "{user_agent}");
}
