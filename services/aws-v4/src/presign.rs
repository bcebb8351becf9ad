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
use crate::canonical::{canonical_query_string, canonical_request, signed_headers};
use crate::constants::*;
use crate::signature::{credential_scope, sign};
use crate::{Credential, SigningKey};
use http::uri::Authority;
use log::debug;
use std::collections::BTreeMap;
use std::time::Duration;
use urlsign_core::hash::EMPTY_STRING_SHA256;
use urlsign_core::time::{format_iso8601, now, DateTime};
use urlsign_core::{Error, Result};

/// How to carry `X-Amz-Security-Token` when the credential has no session token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecurityTokenPolicy {
    /// Always carry the parameter, empty-valued if there is no token.
    #[default]
    AlwaysInclude,
    /// Leave the parameter out if there is no token.
    OmitIfAbsent,
}

/// PresignRequest describes everything a presigned url is computed from.
///
/// Build it once with [`PresignRequest::new`] and the `with_*` setters; the
/// same request and credential at the same time always yield the same url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignRequest {
    scheme: String,
    method: String,
    host: String,
    path: String,
    service: String,
    region: String,
    time: Option<DateTime>,
    expires_in: Duration,
    headers: Vec<(String, String)>,
    query: BTreeMap<String, String>,
    payload_hash: String,
    security_token_policy: SecurityTokenPolicy,
}

impl PresignRequest {
    /// Create a new request for `host` and `path` of given service in given region.
    ///
    /// Defaults: scheme `https`, method `GET`, expires in 24 hours, no extra
    /// headers or query, empty payload, signed at the time of presigning.
    pub fn new(host: &str, path: &str, service: &str, region: &str) -> Self {
        Self {
            scheme: "https".to_string(),
            method: "GET".to_string(),
            host: host.to_string(),
            path: path.to_string(),
            service: service.to_string(),
            region: region.to_string(),
            time: None,
            expires_in: Duration::from_secs(86400),
            headers: Vec::new(),
            query: BTreeMap::new(),
            payload_hash: EMPTY_STRING_SHA256.to_string(),
            security_token_policy: SecurityTokenPolicy::default(),
        }
    }

    /// Set the url scheme, like `wss`.
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// Set the http method.
    pub fn with_method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    /// Set the signing time instead of taking the current time.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Set how long the url stays valid. Only whole seconds are used.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Add a header to sign.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Add an extra query parameter, overriding a previous one with the same key.
    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    /// Set the hex encoded SHA256 of the payload.
    pub fn with_payload_hash(mut self, payload_hash: &str) -> Self {
        self.payload_hash = payload_hash.to_string();
        self
    }

    /// Set the [`SecurityTokenPolicy`].
    pub fn with_security_token_policy(mut self, policy: SecurityTokenPolicy) -> Self {
        self.security_token_policy = policy;
        self
    }

    /// Host of this request.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path of this request.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Service of this request.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region of this request.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Expiry of this request.
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Extra query parameters of this request.
    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(Error::request_invalid("host must not be empty"));
        }
        self.host.parse::<Authority>().map_err(|e| {
            Error::request_invalid(format!("host {} is not a valid authority", self.host))
                .with_source(e)
        })?;
        if !self.path.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "path {} must start with '/'",
                self.path
            )));
        }
        if self.scheme.is_empty() {
            return Err(Error::request_invalid("scheme must not be empty"));
        }
        if self.region.is_empty() || self.service.is_empty() {
            return Err(Error::request_invalid(
                "region and service must not be empty",
            ));
        }
        Ok(())
    }
}

/// Presign the request with given credential and return the url.
///
/// The reserved `X-Amz-*` parameters join the caller's query and are signed
/// together with it; the signature is appended last and is the only
/// parameter not covered by itself.
pub fn presign(req: &PresignRequest, cred: &Credential) -> Result<String> {
    if cred.access_key_id.is_empty() {
        return Err(Error::credential_missing("access key id is empty"));
    }
    if cred.secret_access_key.is_empty() {
        return Err(Error::credential_missing("secret access key is empty"));
    }
    // The access key id is embedded verbatim in the credential scope.
    if cred
        .access_key_id
        .chars()
        .any(|c| c == '/' || c.is_whitespace() || c.is_control())
    {
        return Err(Error::credential_invalid(
            "access key id contains '/', whitespace or control characters",
        ));
    }
    req.validate()?;

    let now = req.time.unwrap_or_else(now);
    if cred.is_expired_at(now) {
        return Err(Error::credential_expired(format!(
            "credential expired before signing time {}",
            format_iso8601(now)
        )));
    }

    // Host is always signed, and replaces any caller supplied one.
    let mut headers = req
        .headers
        .iter()
        .filter(|(k, _)| !k.trim().eq_ignore_ascii_case("host"))
        .cloned()
        .collect::<Vec<_>>();
    headers.push(("host".to_string(), req.host.clone()));

    let scope = credential_scope(now, &req.region, &req.service);
    debug!("calculated scope: {scope}");

    let mut query = req.query.clone();
    query.insert(X_AMZ_ALGORITHM.into(), AWS4_HMAC_SHA256.into());
    query.insert(
        X_AMZ_CREDENTIAL.into(),
        format!("{}/{}", cred.access_key_id, scope),
    );
    query.insert(X_AMZ_DATE.into(), format_iso8601(now));
    query.insert(
        X_AMZ_EXPIRES.into(),
        req.expires_in.as_secs().to_string(),
    );
    query.insert(X_AMZ_SIGNED_HEADERS.into(), signed_headers(&headers));
    match (&cred.session_token, req.security_token_policy) {
        (Some(token), _) => {
            query.insert(X_AMZ_SECURITY_TOKEN.into(), token.clone());
        }
        (None, SecurityTokenPolicy::AlwaysInclude) => {
            query.insert(X_AMZ_SECURITY_TOKEN.into(), String::new());
        }
        (None, SecurityTokenPolicy::OmitIfAbsent) => {
            query.remove(X_AMZ_SECURITY_TOKEN);
        }
    }
    // The signature can't sign itself.
    query.remove(X_AMZ_SIGNATURE);

    let creq = canonical_request(
        &req.method,
        &req.path,
        &query,
        &headers,
        &req.payload_hash,
    );

    let signing_key =
        SigningKey::derive(&cred.secret_access_key, now, &req.region, &req.service);
    let signature = sign(&creq, now, &req.region, &req.service, &signing_key);

    query.insert(X_AMZ_SIGNATURE.into(), signature);

    Ok(format!(
        "{}://{}{}?{}",
        req.scheme,
        req.host,
        req.path,
        canonical_query_string(&query)
    ))
}
