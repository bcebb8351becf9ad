//! Core components for presigning urls.
//!
//! This crate provides the foundational types and traits for the urlsign ecosystem.
//! It defines the abstractions that let a service-specific crate turn a
//! credential and a point in time into a self-contained presigned url.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the environment implementation
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and url presigning (`PresignUrl`)
//! - **Signer**: The orchestrator that resolves a credential and presigns a url, once per call
//!
//! ## Example
//!
//! ```no_run
//! use urlsign_core::time::DateTime;
//! use urlsign_core::{Context, PresignUrl, ProvideCredential, Result, Signer, SigningCredential};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-access-key".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl PresignUrl for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     fn presign_url(&self, _: &Self::Credential, _: DateTime) -> Result<String> {
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::default(), MyProvider, MyBuilder);
//! let url = signer.presign().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{PresignUrl, ProvideCredential, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod signer;
pub use signer::Signer;
