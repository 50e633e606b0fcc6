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

use clap::Parser;
use log::info;
use rgw_swift::swift::authenticate;
use std::path::PathBuf;

/// Download an object of a RADOS Gateway container into a local file.
#[derive(Parser)]
struct Cli {
    /// Gateway address, e.g. https://rgw.example.net:8080
    #[arg(long, env = "SWIFT_SERVER_ENDPOINT", default_value = "http://127.0.0.1:7480")]
    server: String,
    /// Swift user, as `account:subuser`.
    #[arg(long, env = "SWIFT_USER")]
    user: String,
    /// Secret key of the Swift user.
    #[arg(long, env = "SWIFT_KEY", hide_env_values = true)]
    key: String,
    /// PEM bundle of CA certificates to trust instead of the system roots.
    #[arg(long, env = "SWIFT_SSL_CERT_FILE")]
    ca_file: Option<PathBuf>,
    /// Container holding the object.
    bucket: String,
    /// Name of the object to download.
    object: String,
    /// File to write; created or truncated.
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let args = Cli::parse();

    let session = authenticate(&args.server, args.ca_file.as_deref(), &args.user, &args.key).await?;

    let resp = session
        .download_object(&args.bucket, &args.object, &args.file)
        .build()
        .send()
        .await?;

    info!(
        "Downloaded {}/{} to {:?} ({} bytes)",
        args.bucket,
        args.object,
        resp.path(),
        resp.bytes_written()
    );
    Ok(())
}
