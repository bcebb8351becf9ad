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
use crate::constants::*;
use std::time::Duration;
use urlsign_core::Context;

/// Config for the presigning profiles.
///
/// Fields set explicitly always win over values loaded by [`Config::from_env`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_REGION`
    /// - env value: `AWS_DEFAULT_REGION`
    pub region: Option<String>,
    /// `websocket_url` is the base url of a websocket api, like
    /// `wss://abcd1234.execute-api.us-east-1.amazonaws.com/prod`.
    ///
    /// It will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: `WEBSOCKET_URL`
    pub websocket_url: Option<String>,
    /// Override the validity of presigned urls.
    pub expires_in: Option<Duration>,
    /// Override the transcribe language code.
    pub language_code: Option<String>,
    /// Override the transcribe media encoding.
    pub media_encoding: Option<String>,
    /// Override the transcribe sample rate in Hz.
    pub sample_rate: Option<u32>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();
        let get = |key: &str| envs.get(key).filter(|v| !v.is_empty()).cloned();

        if self.region.is_none() {
            self.region = get(AWS_REGION).or_else(|| get(AWS_DEFAULT_REGION));
        }
        if self.websocket_url.is_none() {
            self.websocket_url = get(WEBSOCKET_URL);
        }

        self
    }
}
