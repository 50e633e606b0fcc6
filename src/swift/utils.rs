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

//! Various utility and helper functions

use crate::swift::error::ValidationErr;
use http::HeaderValue;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Maximum length in bytes of a container name accepted by Swift.
pub const MAX_BUCKET_NAME_LEN: usize = 256;

/// Maximum length in bytes of an object name accepted by Swift.
pub const MAX_OBJECT_NAME_LEN: usize = 1024;

const UNRESERVED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &UNRESERVED_ENCODE_SET.remove(b'/');

/// Percent-encodes everything except RFC 3986 unreserved characters.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, UNRESERVED_ENCODE_SET).collect()
}

/// Percent-encodes an object key, keeping `/` as the pseudo-directory separator.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Validates a container name.
///
/// Swift container names are opaque, but they form a single path segment, so
/// they must be non-empty, must not contain `/` and must fit the service limit.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    if bucket_name.is_empty() {
        return Err(ValidationErr::InvalidBucketName(
            "bucket name cannot be empty".into(),
        ));
    }
    if bucket_name.len() > MAX_BUCKET_NAME_LEN {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name cannot be longer than {MAX_BUCKET_NAME_LEN} bytes"
        )));
    }
    if bucket_name.contains('/') {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' cannot contain '/'"
        )));
    }
    if is_dot_segment(bucket_name) {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name cannot be '{bucket_name}'"
        )));
    }
    Ok(())
}

/// Reports whether a path segment is `.` or `..`, in plain or `%2e` form.
///
/// URL parsing collapses such segments, which would move the request out of
/// its container.
fn is_dot_segment(segment: &str) -> bool {
    let s = segment.to_ascii_lowercase().replace("%2e", ".");
    s == "." || s == ".."
}

pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if object_name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    if object_name.len() > MAX_OBJECT_NAME_LEN {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name cannot be longer than {MAX_OBJECT_NAME_LEN} bytes"
        )));
    }
    if object_name.split('/').any(is_dot_segment) {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name '{object_name}' cannot contain '.' or '..' segments"
        )));
    }
    Ok(())
}

/// Checks that `value` can be sent as the value of header `name`.
///
/// Control characters such as CR and LF are rejected. The value itself is
/// not echoed in the error since it may be a secret.
pub fn check_header_value(name: &str, value: &str) -> Result<(), ValidationErr> {
    HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|e| ValidationErr::InvalidHeaderValue {
            name: name.to_string(),
            cause: e.to_string(),
        })
}

/// Splits a plain-text Swift listing into names, in server order.
///
/// A single trailing newline terminates the last entry and does not yield an
/// empty name.
pub fn split_listing(body: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(body);
    let text = text.strip_suffix('\n').unwrap_or(&text);
    text.split('\n').map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencode_object_key_keeps_separator() {
        assert_eq!(urlencode_object_key("a/b c/d+e"), "a/b%20c/d%2Be");
        assert_eq!(urlencode_object_key("日本"), "%E6%97%A5%E6%9C%AC");
    }

    #[test]
    fn test_url_encode_escapes_separator() {
        assert_eq!(url_encode("via-bucket/001"), "via-bucket%2F001");
        assert_eq!(url_encode("ping:swift"), "ping%3Aswift");
    }

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("via-bucket001").is_ok());
        assert!(check_bucket_name("").is_err());
        assert!(check_bucket_name("a/b").is_err());
        assert!(check_bucket_name(&"x".repeat(MAX_BUCKET_NAME_LEN + 1)).is_err());
        assert!(check_bucket_name(".").is_err());
        assert!(check_bucket_name("..").is_err());
        assert!(check_bucket_name("%2E%2e").is_err());
        assert!(check_bucket_name("...").is_ok());
        assert!(check_bucket_name(".hidden").is_ok());
    }

    #[test]
    fn test_check_object_name() {
        assert!(check_object_name("dir/sub/file.txt").is_ok());
        assert!(check_object_name("").is_err());
        assert!(check_object_name("../other-bucket/victim").is_err());
        assert!(check_object_name("a/./b").is_err());
        assert!(check_object_name("a/%2E%2E/b").is_err());
        assert!(check_object_name("dir/..").is_err());
        assert!(check_object_name("a..b/.c/d.").is_ok());
        assert!(check_object_name("dir//file").is_ok());
    }

    #[test]
    fn test_check_header_value() {
        assert!(check_header_value("X-Auth-User", "ping:swift").is_ok());
        let err = check_header_value("X-Auth-User", "ping:swift\r\nX-Evil: 1").unwrap_err();
        assert!(matches!(
            err,
            ValidationErr::InvalidHeaderValue { ref name, .. } if name == "X-Auth-User"
        ));
        assert!(!err.to_string().contains("X-Evil"));
    }

    #[test]
    fn test_split_listing() {
        assert_eq!(split_listing(b"a\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_listing(b"a\nb\nc\n"), vec!["a", "b", "c"]);
        assert_eq!(split_listing(b"only"), vec!["only"]);
    }

    quickcheck! {
        fn prop_split_listing_round_trips(names: Vec<String>) -> bool {
            let names: Vec<String> = names
                .into_iter()
                .map(|n| n.replace('\n', ""))
                .filter(|n| !n.is_empty())
                .collect();
            if names.is_empty() {
                return true;
            }
            let body = names.join("\n");
            split_listing(body.as_bytes()) == names
        }
    }
}
