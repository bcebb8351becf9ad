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
//! Recompute signatures of presigned urls the way a server would.

use super::split_url;
use crate::*;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use pretty_assertions::assert_eq;
use sha2::{Digest, Sha256};
use std::time::Duration;
use urlsign_aws_v4::{presign, PresignRequest, TranscribeStreaming, WebSocketApi};
use urlsign_core::PresignUrl;

const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn hmac(key: &[u8], data: &str) -> Vec<u8> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("hmac accepts any key length");
    mac.update(data.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Verify a url that signs only the host header with an empty payload.
fn verify(url: &str, secret: &str) {
    let (base, mut query) = split_url(url);
    let signature = query
        .remove("X-Amz-Signature")
        .expect("url must carry a signature");
    assert_eq!(query["X-Amz-SignedHeaders"], "host");

    let (_, rest) = base.split_once("://").expect("url must have a scheme");
    let (host, path) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, "/"),
    };

    let canonical_query = query
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, UNRESERVED),
                utf8_percent_encode(v, UNRESERVED)
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    let creq = format!(
        "GET\n{path}\n{canonical_query}\nhost:{host}\n\nhost\n{}",
        hex::encode(Sha256::digest(b""))
    );

    let scope = query["X-Amz-Credential"]
        .split_once('/')
        .map(|(_, scope)| scope.to_string())
        .expect("credential must carry a scope");
    let parts = scope.split('/').collect::<Vec<_>>();
    let string_to_sign = format!(
        "AWS4-HMAC-SHA256\n{}\n{scope}\n{}",
        query["X-Amz-Date"],
        hex::encode(Sha256::digest(creq.as_bytes()))
    );

    let mut key = hmac(format!("AWS4{secret}").as_bytes(), parts[0]);
    for part in &parts[1..] {
        key = hmac(&key, part);
    }
    assert_eq!(signature, hex::encode(hmac(&key, &string_to_sign)), "{url}");
}

#[test]
fn test_verify_profiles() -> anyhow::Result<()> {
    init_logger();

    let transcribe = TranscribeStreaming::new("us-east-1");
    let websocket =
        WebSocketApi::new(WEBSOCKET_URL, "us-east-1")?.with_expires_in(Duration::from_secs(60));

    for cred in [credential(), credential_with_token()] {
        verify(
            &transcribe.presign_url(&cred, frozen_time())?,
            SECRET_ACCESS_KEY,
        );
        verify(
            &websocket.presign_url(&cred, frozen_time())?,
            SECRET_ACCESS_KEY,
        );
    }
    Ok(())
}

#[test]
fn test_verify_reserved_characters() -> anyhow::Result<()> {
    let req = PresignRequest::new("example.amazonaws.com", "/", "execute-api", "us-east-1")
        .with_scheme("wss")
        .with_time(frozen_time())
        .with_query("space", "a b")
        .with_query("slash", "a/b")
        .with_query("semicolon", "a;b")
        .with_query("plus", "a+b")
        .with_query("unicode", "héllo")
        .with_query("unreserved", "A-z_0.9~");

    let url = presign(&req, &credential_with_token())?;
    assert!(url.contains("space=a%20b"));
    assert!(url.contains("slash=a%2Fb"));
    assert!(url.contains("semicolon=a%3Bb"));
    assert!(url.contains("plus=a%2Bb"));
    assert!(url.contains("unicode=h%C3%A9llo"));
    assert!(url.contains("unreserved=A-z_0.9~"));

    verify(&url, SECRET_ACCESS_KEY);
    Ok(())
}

#[test]
fn test_verify_fails_with_wrong_secret() -> anyhow::Result<()> {
    let url = TranscribeStreaming::new("us-east-1").presign_url(&credential(), frozen_time())?;

    let result = std::panic::catch_unwind(|| verify(&url, "not-the-secret"));
    assert!(result.is_err());
    Ok(())
}
