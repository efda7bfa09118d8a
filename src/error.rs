//! Error types for client authorization key generation
//!
//! Every variant is terminal: the binary reports it once on stderr and
//! exits with status 1.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for keygen operations
pub type Result<T> = std::result::Result<T, KeygenError>;

/// Which half of the credential a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Public,
    Private,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Public => f.write_str("public"),
            KeyKind::Private => f.write_str("private"),
        }
    }
}

#[derive(Debug, Error)]
pub enum KeygenError {
    /// Wrong number of positional arguments
    #[error("Usage: {program} <name> <onion_address>")]
    Usage { program: String },

    /// The entropy source could not fill the key buffer
    #[error("failed to generate private key")]
    RandomSource(#[from] rand::Error),

    /// X25519 produced the all-zero point
    #[error("failed to generate public key: scalar multiplication yielded the identity point")]
    ScalarMult,

    /// Either credential file could not be created or written
    #[error("failed to write {kind} key file {path:?}")]
    FileWrite {
        kind: KeyKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
