//! Core components for talking to a DocumentDB account.
//!
//! This crate provides the foundational types and traits shared by the docdb
//! client crates. It knows nothing about databases or collections; it only
//! describes how a request gets signed and sent.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the shared HTTP client and environment access
//! - **Traits**: Abstract interfaces for request signing (`SignRequest`) and credential validation (`SigningCredential`)
//! - **Signer**: Binds one credential to one request signer and applies it to outgoing requests
//!
//! ## Example
//!
//! ```no_run
//! use docdb_core::{Context, Result, SignRequest, Signer, SigningCredential};
//! use async_trait::async_trait;
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! #[async_trait]
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut Parts,
//!         credential: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         let Some(cred) = credential else {
//!             return Err(docdb_core::Error::credential_invalid("credential is required"));
//!         };
//!         req.headers.insert("x-secret", cred.secret.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     MyCredential { secret: "s3cr3t".to_string() },
//!     MySigner,
//! );
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com/dbs")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Base64 and HMAC helpers
//! - [`time`]: Time helpers producing the wire date format
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
