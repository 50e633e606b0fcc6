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

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_RANGE: &str = "Content-Range";
pub const RANGE: &str = "Range";

pub const X_AUTH_USER: &str = "X-Auth-User";
pub const X_AUTH_KEY: &str = "X-Auth-Key";
pub const X_AUTH_TOKEN: &str = "X-Auth-Token";
pub const X_STORAGE_URL: &str = "X-Storage-Url";

pub const X_CONTAINER_READ: &str = "X-Container-Read";
pub const X_CONTAINER_WRITE: &str = "X-Container-Write";

pub const X_COPY_FROM: &str = "X-Copy-From";

pub const PREFIX: &str = "prefix";
pub const MARKER: &str = "marker";
pub const PATH: &str = "path";
pub const LIMIT: &str = "limit";
