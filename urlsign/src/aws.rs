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
//! AWS presigning, re-exported from `urlsign-aws-v4`.

pub use urlsign_aws_v4::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result, Signer};

/// Signer presigning with AWS credentials.
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a signer for streaming transcription.
///
/// `cfg` is completed from the process environment; credentials are resolved
/// through [`DefaultCredentialProvider`] on every presign.
#[cfg(feature = "default-context")]
pub fn transcribe_streaming_signer(cfg: Config) -> Result<DefaultSigner> {
    let ctx = default_context();
    let cfg = cfg.from_env(&ctx);
    let profile = TranscribeStreaming::from_config(&cfg)?;
    Ok(Signer::new(ctx, DefaultCredentialProvider::new(), profile))
}

/// Create a signer for a websocket management api.
///
/// The api base url is taken from `cfg.websocket_url` or `WEBSOCKET_URL`.
#[cfg(feature = "default-context")]
pub fn websocket_api_signer(cfg: Config) -> Result<DefaultSigner> {
    let ctx = default_context();
    let cfg = cfg.from_env(&ctx);
    let profile = WebSocketApi::from_config(&cfg)?;
    Ok(Signer::new(ctx, DefaultCredentialProvider::new(), profile))
}
