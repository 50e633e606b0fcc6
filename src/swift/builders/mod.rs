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

//! Argument builders for Swift API operations

// Bucket operations
mod create_bucket;
mod list_buckets;
mod list_objects;
mod remove_bucket;
mod update_bucket_acls;

pub use create_bucket::{CreateBucket, CreateBucketBldr};
pub use list_buckets::{ListBuckets, ListBucketsBldr};
pub use list_objects::{DEFAULT_LIST_LIMIT, ListObjects, ListObjectsBldr, MAX_LIST_LIMIT};
pub use remove_bucket::{RemoveBucket, RemoveBucketBldr};
pub use update_bucket_acls::{UpdateBucketAcls, UpdateBucketAclsBldr};

// Object operations
mod copy_object;
mod download_object;
mod get_object;
mod put_object;
mod remove_object;

pub use copy_object::{CopyObject, CopyObjectBldr};
pub use download_object::{DownloadObject, DownloadObjectBldr};
pub use get_object::{GetObject, GetObjectBldr};
pub use put_object::{PutObject, PutObjectBldr};
pub use remove_object::{RemoveObject, RemoveObjectBldr};
