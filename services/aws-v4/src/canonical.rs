// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
//! Canonical request construction.
//!
//! ```text
//! METHOD\n
//! PATH\n
//! CANONICAL_QUERY\n
//! CANONICAL_HEADERS\n
//! \n
//! SIGNED_HEADERS\n
//! PAYLOAD_HASH
//! ```
//!
//! Every byte here feeds the signature: a single difference from what the
//! verifying service computes turns into an opaque authentication failure.

use crate::constants::AWS_QUERY_ENCODE_SET;
use percent_encoding::utf8_percent_encode;
use std::collections::BTreeMap;

/// Build the canonical request string.
///
/// - `method` is upper-cased.
/// - `path` is used verbatim, it must already be percent encoded.
/// - `payload_hash` is used verbatim, it must be a lowercase hex SHA256.
pub fn canonical_request(
    method: &str,
    path: &str,
    query: &BTreeMap<String, String>,
    headers: &[(String, String)],
    payload_hash: &str,
) -> String {
    let headers = normalize_headers(headers);
    let canonical_query = canonical_query_string(query);

    // 256 is specially chosen to avoid reallocation for most requests.
    let mut s = String::with_capacity(256);
    s.push_str(&method.to_ascii_uppercase());
    s.push('\n');
    s.push_str(path);
    s.push('\n');
    s.push_str(&canonical_query);
    s.push('\n');
    for (name, value) in &headers {
        s.push_str(name);
        s.push(':');
        s.push_str(value);
        s.push('\n');
    }
    s.push('\n');
    s.push_str(&join_names(&headers));
    s.push('\n');
    s.push_str(payload_hash);
    s
}

/// Build the canonical query string.
///
/// Keys are sorted byte-wise, then both keys and values are encoded so that
/// only unreserved characters stay as they are.
///
/// ```
/// use std::collections::BTreeMap;
/// use urlsign_aws_v4::canonical_query_string;
///
/// let query = BTreeMap::from([
///     ("b".to_string(), "2".to_string()),
///     ("a".to_string(), "1".to_string()),
/// ]);
/// assert_eq!(canonical_query_string(&query), "a=1&b=2");
/// ```
pub fn canonical_query_string(query: &BTreeMap<String, String>) -> String {
    // BTreeMap over String iterates in byte-wise order already.
    query
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the canonical headers block, each entry terminated by `\n`.
///
/// ```shell
/// [("Host", " x.example.com ")] => "host:x.example.com\n"
/// ```
pub fn canonical_headers(headers: &[(String, String)]) -> String {
    let mut s = String::with_capacity(64);
    for (name, value) in normalize_headers(headers) {
        s.push_str(&name);
        s.push(':');
        s.push_str(&value);
        s.push('\n');
    }
    s
}

/// Build the signed headers list: lower-cased names, sorted, joined by `;`.
pub fn signed_headers(headers: &[(String, String)]) -> String {
    join_names(&normalize_headers(headers))
}

/// Lower-case and trim names, trim values, then sort by name.
///
/// Duplicates are kept, and whitespace inside values is left alone.
fn normalize_headers(headers: &[(String, String)]) -> Vec<(String, String)> {
    let mut normalized = headers
        .iter()
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect::<Vec<_>>();
    normalized.sort();
    normalized
}

fn join_names(headers: &[(String, String)]) -> String {
    headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";")
}
