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
use super::DEFAULT_PROFILE_EXPIRES_IN;
use crate::{presign, Config, Credential, PresignRequest};
use http::uri::Authority;
use log::debug;
use std::time::Duration;
use urlsign_core::time::DateTime;
use urlsign_core::{Error, PresignUrl, Result};

const SERVICE: &str = "execute-api";

/// WebSocketApi presigns connect urls for a websocket management api.
///
/// Host and stage are taken from the api's base url, e.g.
/// `wss://abcd1234.execute-api.us-east-1.amazonaws.com/prod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSocketApi {
    region: String,
    host: String,
    path: String,
    expires_in: Duration,
}

impl WebSocketApi {
    /// Create a new profile from the api base url.
    ///
    /// Returns an error if the url has no scheme delimiter, no host or no
    /// stage segment.
    pub fn new(base_url: &str, region: &str) -> Result<Self> {
        let (host, path) = split_base_url(base_url)?;

        Ok(Self {
            region: region.to_string(),
            host,
            path,
            expires_in: DEFAULT_PROFILE_EXPIRES_IN,
        })
    }

    /// Build the profile from config.
    ///
    /// Both `region` and `websocket_url` are required.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let region = cfg
            .region
            .as_deref()
            .ok_or_else(|| Error::config_invalid("region is required for websocket api"))?;
        let base_url = cfg.websocket_url.as_deref().ok_or_else(|| {
            Error::config_invalid("websocket_url is required for websocket api")
        })?;

        let mut profile = Self::new(base_url, region)?;
        if let Some(v) = cfg.expires_in {
            profile = profile.with_expires_in(v);
        }
        Ok(profile)
    }

    /// Set how long the url stays valid.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Host extracted from the base url.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path extracted from the base url, like `/prod`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Build the request to presign at given time.
    pub fn request(&self, time: DateTime) -> PresignRequest {
        PresignRequest::new(&self.host, &self.path, SERVICE, &self.region)
            .with_scheme("wss")
            .with_method("GET")
            .with_time(time)
            .with_expires_in(self.expires_in)
    }
}

impl PresignUrl for WebSocketApi {
    type Credential = Credential;

    fn presign_url(&self, credential: &Self::Credential, now: DateTime) -> Result<String> {
        debug!("presigning websocket api url for {}{}", self.host, self.path);
        presign(&self.request(now), credential)
    }
}

/// Split `scheme://host/stage/...` into `host` and `/stage`.
fn split_base_url(base_url: &str) -> Result<(String, String)> {
    let (_, rest) = base_url.split_once("://").ok_or_else(|| {
        Error::config_invalid(format!("websocket url {base_url} has no scheme"))
    })?;

    let mut segments = rest.split('/');
    let host = segments.next().unwrap_or_default();
    if host.is_empty() {
        return Err(Error::config_invalid(format!(
            "websocket url {base_url} has no host"
        )));
    }
    host.parse::<Authority>().map_err(|e| {
        Error::config_invalid(format!("websocket url {base_url} has invalid host"))
            .with_source(e)
    })?;

    let stage = segments
        .next()
        .and_then(|s| s.split(['?', '#']).next())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            Error::config_invalid(format!("websocket url {base_url} has no stage"))
        })?;

    Ok((host.to_string(), format!("/{stage}")))
}
