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
use log::debug;
use std::time::Duration;
use urlsign_core::time::DateTime;
use urlsign_core::{Error, PresignUrl, Result};

const SERVICE: &str = "transcribe";
const PATH: &str = "/stream-transcription-websocket";
const PORT: u16 = 8443;

/// TranscribeStreaming presigns websocket urls for streaming transcription.
///
/// ```text
/// wss://transcribestreaming.<region>.amazonaws.com:8443/stream-transcription-websocket
///     ?language-code=en-US&media-encoding=pcm&sample-rate=16000&X-Amz-...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribeStreaming {
    region: String,
    language_code: String,
    media_encoding: String,
    sample_rate: u32,
    expires_in: Duration,
}

impl TranscribeStreaming {
    /// Create a new profile for given region with default audio settings.
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            language_code: "en-US".to_string(),
            media_encoding: "pcm".to_string(),
            sample_rate: 16000,
            expires_in: DEFAULT_PROFILE_EXPIRES_IN,
        }
    }

    /// Build the profile from config.
    ///
    /// Returns an error if no region is configured.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let region = cfg.region.as_deref().ok_or_else(|| {
            Error::config_invalid("region is required for transcribe streaming")
        })?;

        let mut profile = Self::new(region);
        if let Some(v) = &cfg.language_code {
            profile = profile.with_language_code(v);
        }
        if let Some(v) = &cfg.media_encoding {
            profile = profile.with_media_encoding(v);
        }
        if let Some(v) = cfg.sample_rate {
            profile = profile.with_sample_rate(v);
        }
        if let Some(v) = cfg.expires_in {
            profile = profile.with_expires_in(v);
        }
        Ok(profile)
    }

    /// Set the language code, like `en-US`.
    pub fn with_language_code(mut self, language_code: &str) -> Self {
        self.language_code = language_code.to_string();
        self
    }

    /// Set the media encoding, like `pcm`.
    pub fn with_media_encoding(mut self, media_encoding: &str) -> Self {
        self.media_encoding = media_encoding.to_string();
        self
    }

    /// Set the sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set how long the url stays valid.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Host of the streaming endpoint, port included.
    pub fn host(&self) -> String {
        format!("transcribestreaming.{}.amazonaws.com:{PORT}", self.region)
    }

    /// Build the request to presign at given time.
    pub fn request(&self, time: DateTime) -> PresignRequest {
        PresignRequest::new(&self.host(), PATH, SERVICE, &self.region)
            .with_scheme("wss")
            .with_method("GET")
            .with_time(time)
            .with_expires_in(self.expires_in)
            .with_query("language-code", &self.language_code)
            .with_query("media-encoding", &self.media_encoding)
            .with_query("sample-rate", self.sample_rate)
    }
}

impl PresignUrl for TranscribeStreaming {
    type Credential = Credential;

    fn presign_url(&self, credential: &Self::Credential, now: DateTime) -> Result<String> {
        debug!(
            "presigning transcribe streaming url in {} for {}",
            self.region, self.language_code
        );
        presign(&self.request(now), credential)
    }
}
