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
use crate::constants::AWS4_REQUEST;
use std::fmt::{Debug, Formatter};
use urlsign_core::hash::hmac_sha256;
use urlsign_core::time::{format_date, DateTime};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// SigningKey is the scoped key derived from a secret access key.
///
/// A key is only valid for the exact date, region and service it was derived
/// for. It is wiped from memory on drop and never printed.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SigningKey([u8; 32]);

impl SigningKey {
    /// Derive the signing key through the four stage HMAC-SHA256 chain:
    ///
    /// ```text
    /// kDate    = HMAC("AWS4" + secret, "20240101")
    /// kRegion  = HMAC(kDate, region)
    /// kService = HMAC(kRegion, service)
    /// kSigning = HMAC(kService, "aws4_request")
    /// ```
    pub fn derive(secret: &str, time: DateTime, region: &str, service: &str) -> Self {
        let secret = Zeroizing::new(format!("AWS4{secret}"));

        let sign_date = Zeroizing::new(hmac_sha256(
            secret.as_bytes(),
            format_date(time).as_bytes(),
        ));
        let sign_region = Zeroizing::new(hmac_sha256(sign_date.as_slice(), region.as_bytes()));
        let sign_service =
            Zeroizing::new(hmac_sha256(sign_region.as_slice(), service.as_bytes()));

        Self(hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes()))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(***)")
    }
}
