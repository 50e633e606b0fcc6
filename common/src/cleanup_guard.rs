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

use rgw_swift::swift::SwiftSession;

/// Cleanup guard that removes the bucket and its objects on request
pub struct CleanupGuard {
    session: SwiftSession,
    bucket_name: String,
}

impl CleanupGuard {
    pub fn new<S: Into<String>>(session: SwiftSession, bucket_name: S) -> Self {
        Self {
            session,
            bucket_name: bucket_name.into(),
        }
    }

    pub async fn cleanup(&self) {
        cleanup(self.session.clone(), &self.bucket_name).await;
    }
}

pub async fn cleanup(session: SwiftSession, bucket_name: &str) {
    tokio::select!(
        _ = tokio::time::sleep(std::time::Duration::from_secs(60)) => {
            eprintln!("Cleanup timeout after 60s while removing bucket {bucket_name}");
        },
        outcome = session.remove_and_purge_bucket(bucket_name) => {
            if let Err(e) = outcome {
                eprintln!("Error removing bucket '{bucket_name}':\n{e}");
            }
        }
    );
}
