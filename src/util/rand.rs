//! Entropy sources

use crate::crypto::KeyGenerator;
use rand::rngs::OsRng;

/// Key generator backed by the operating system CSPRNG
pub fn system_generator() -> KeyGenerator<OsRng> {
    KeyGenerator::new(OsRng)
}
