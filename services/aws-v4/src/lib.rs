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
//! AWS SigV4 query presigning.
//!
//! This crate builds urls that carry their own authorization in the query
//! string, so that clients which cannot set headers (browsers opening a
//! websocket, for example) can still reach authenticated endpoints.
//!
//! ## Example
//!
//! ```no_run
//! use urlsign_aws_v4::{DefaultCredentialProvider, TranscribeStreaming};
//! use urlsign_core::{Context, OsEnv, Signer};
//!
//! #[tokio::main]
//! async fn main() -> urlsign_core::Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!     let signer = Signer::new(
//!         ctx,
//!         DefaultCredentialProvider::new(),
//!         TranscribeStreaming::new("us-east-1"),
//!     );
//!
//!     let url = signer.presign().await?;
//!     println!("{url}");
//!     Ok(())
//! }
//! ```
//!
//! The lower level pieces are exported as well: [`canonical_request`],
//! [`SigningKey::derive`], [`sign`] and [`presign`] can be combined to presign
//! requests for any SigV4 service.

#![warn(missing_docs)]

mod constants;

mod credential;
pub use credential::Credential;

mod key;
pub use key::SigningKey;

mod canonical;
pub use canonical::canonical_headers;
pub use canonical::canonical_query_string;
pub use canonical::canonical_request;
pub use canonical::signed_headers;

mod signature;
pub use signature::credential_scope;
pub use signature::sign;
pub use signature::string_to_sign;

mod presign;
pub use presign::presign;
pub use presign::PresignRequest;
pub use presign::SecurityTokenPolicy;

mod config;
pub use config::Config;

mod profile;
pub use profile::TranscribeStreaming;
pub use profile::WebSocketApi;
pub use profile::DEFAULT_PROFILE_EXPIRES_IN;

mod provide_credential;
pub use provide_credential::*;
