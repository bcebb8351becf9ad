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
use crate::constants::{AWS4_HMAC_SHA256, AWS4_REQUEST};
use crate::SigningKey;
use urlsign_core::hash::{hex_hmac_sha256, hex_sha256};
use urlsign_core::time::{format_date, format_iso8601, DateTime};

/// Build the credential scope: `20240101/<region>/<service>/aws4_request`.
pub fn credential_scope(time: DateTime, region: &str, service: &str) -> String {
    format!("{}/{region}/{service}/{AWS4_REQUEST}", format_date(time))
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20240101T120000Z
/// 20240101/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(
    canonical_request: &str,
    time: DateTime,
    region: &str,
    service: &str,
) -> String {
    [
        AWS4_HMAC_SHA256.to_string(),
        format_iso8601(time),
        credential_scope(time, region, service),
        hex_sha256(canonical_request.as_bytes()),
    ]
    .join("\n")
}

/// Compute the lowercase hex signature of a canonical request.
///
/// `signing_key` must have been derived for the same day, region and
/// service, otherwise the signature will never verify.
pub fn sign(
    canonical_request: &str,
    time: DateTime,
    region: &str,
    service: &str,
    signing_key: &SigningKey,
) -> String {
    let string_to_sign = string_to_sign(canonical_request, time, region, service);
    log::debug!("calculated string to sign: {string_to_sign}");

    hex_hmac_sha256(signing_key.as_bytes(), string_to_sign.as_bytes())
}
