//! Cryptographic primitives for descriptor client authorization
//!
//! X25519 key generation and base32 encoding.
//! All crypto operations are isolated here - no IO allowed.

pub mod encoding;
pub mod keys;

pub use encoding::{decode, encode, ENCODED_KEY_LEN};
pub use keys::{derive_public_key, ClientAuthKeypair, KeyGenerator, PrivateKey, PublicKey};
