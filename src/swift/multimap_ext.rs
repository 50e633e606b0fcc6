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

use crate::swift::utils::url_encode;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds the key-value pair only when the value is present and non-empty
    fn add_non_empty<K: Into<String>>(&mut self, key: K, value: Option<String>);

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_non_empty<K: Into<String>>(&mut self, key: K, value: Option<String>) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.insert(key.into(), v);
        }
    }

    fn to_query_string(&self) -> String {
        // sorted so that the produced URL is stable
        let mut pairs: Vec<(&String, &String)> = self
            .iter_all()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k, v)))
            .collect();
        pairs.sort();

        let mut query = String::new();
        for (key, value) in pairs {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&url_encode(key));
            query.push('=');
            query.push_str(&url_encode(value));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_string_sorted_and_encoded() {
        let mut m = Multimap::new();
        m.add("prefix", "photos/2024 q1");
        m.add("limit", "10");
        assert_eq!(m.to_query_string(), "limit=10&prefix=photos%2F2024%20q1");
    }

    #[test]
    fn test_add_non_empty() {
        let mut m = Multimap::new();
        m.add_non_empty("marker", None);
        m.add_non_empty("path", Some(String::new()));
        m.add_non_empty("prefix", Some("a".into()));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("prefix").map(String::as_str), Some("a"));
    }
}
