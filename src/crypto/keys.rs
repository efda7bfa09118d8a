//! X25519 key material for v3 Onion Service client authorization

use super::encoding;
use crate::error::{KeygenError, Result};
use rand::{CryptoRng, RngCore};
use std::fmt;
use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};

/// Size of an X25519 scalar or point
pub const KEY_LEN: usize = 32;

/// Apply RFC 7748 clamping to a raw scalar
pub fn clamp(mut scalar: [u8; KEY_LEN]) -> [u8; KEY_LEN] {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
    scalar
}

/// Clamped X25519 private scalar
///
/// Only constructible through [`PrivateKey::from_bytes`], which clamps.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey([u8; KEY_LEN]);

impl PrivateKey {
    /// Clamp raw bytes into a private key
    pub fn from_bytes(raw: [u8; KEY_LEN]) -> Self {
        Self(clamp(raw))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Unpadded uppercase base32
    pub fn encoded(&self) -> String {
        encoding::encode(&self.0)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([redacted])")
    }
}

/// X25519 public point (u-coordinate)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; KEY_LEN]);

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; KEY_LEN] {
        self.0
    }

    /// Unpadded uppercase base32
    pub fn encoded(&self) -> String {
        encoding::encode(&self.0)
    }
}

/// X25519 scalar multiplication that rejects the all-zero output
fn scalar_mult(scalar: [u8; KEY_LEN], point: [u8; KEY_LEN]) -> Result<[u8; KEY_LEN]> {
    let shared = x25519(scalar, point);
    if shared == [0u8; KEY_LEN] {
        return Err(KeygenError::ScalarMult);
    }
    Ok(shared)
}

/// Derive the public key by multiplying the base point by the private scalar
pub fn derive_public_key(private: &PrivateKey) -> Result<PublicKey> {
    scalar_mult(private.0, X25519_BASEPOINT_BYTES).map(PublicKey)
}

/// A freshly generated descriptor client authorization keypair
#[derive(Debug, Clone)]
pub struct ClientAuthKeypair {
    private: PrivateKey,
    public: PublicKey,
}

impl ClientAuthKeypair {
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }
}

/// Key generator over an injected entropy source
///
/// The binary injects the OS generator; tests inject fixed or failing sources.
pub struct KeyGenerator<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> KeyGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw 32 bytes from the source and clamp them
    pub fn generate_private_key(&mut self) -> Result<PrivateKey> {
        let mut raw = [0u8; KEY_LEN];
        self.rng.try_fill_bytes(&mut raw)?;
        Ok(PrivateKey::from_bytes(raw))
    }

    /// Generate a private key, then derive its public key
    pub fn generate_keypair(&mut self) -> Result<ClientAuthKeypair> {
        let private = self.generate_private_key()?;
        let public = derive_public_key(&private)?;
        Ok(ClientAuthKeypair { private, public })
    }
}
