//! onion-auth-keygen library crate
//!
//! Generates x25519 client authorization credentials for v3 Onion Service
//! descriptors.
//!
//! # Modules
//!
//! - [`auth`] - `.auth` / `.auth_private` formatting, persistence, report
//! - [`cli`] - Command-line interface (two positional arguments)
//! - [`crypto`] - X25519 key generation, clamping, base32 encoding
//! - [`error`] - Error taxonomy
//! - [`logging`] - tracing subscriber setup
//! - [`util`] - Entropy sources

#![allow(clippy::doc_markdown)] // Doc formatting is secondary
#![allow(clippy::uninlined_format_args)] // Format string style preference
#![allow(clippy::module_name_repetitions)] // KeygenError in error is fine

pub mod auth;
pub mod cli;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod util;

pub use error::{KeygenError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
