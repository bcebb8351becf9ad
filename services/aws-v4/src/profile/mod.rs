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
//! Preconfigured presigners for the streaming endpoints.
//!
//! Both profiles implement [`PresignUrl`](urlsign_core::PresignUrl) and can be
//! plugged into a [`Signer`](urlsign_core::Signer), which resolves the
//! credential and the current time for every url.

use std::time::Duration;

mod transcribe;
pub use transcribe::TranscribeStreaming;

mod websocket;
pub use websocket::WebSocketApi;

/// Default validity of urls produced by the profiles.
pub const DEFAULT_PROFILE_EXPIRES_IN: Duration = Duration::from_secs(15);
