//! Descriptor client authorization credentials
//!
//! Turns a generated keypair into the two text files Tor expects and the
//! confirmation printed to the operator:
//! 1. Encode both keys as unpadded base32
//! 2. Format the `.auth` and `.auth_private` lines
//! 3. Write the public file, then the private file
//! 4. Report keys and paths on stdout

mod credential;
mod files;

pub use credential::{format_private, format_public, strip_onion_suffix};
pub use files::{persist, CredentialPaths, PRIVATE_FILE_MODE, PUBLIC_FILE_MODE};

use crate::crypto::KeyGenerator;
use crate::error::Result;
use rand::{CryptoRng, RngCore};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// A persisted client authorization credential
#[derive(Debug, Clone)]
pub struct Credential {
    pub name: String,
    pub encoded_public: String,
    pub encoded_private: String,
    pub paths: CredentialPaths,
}

/// Generate a keypair for `name` and persist it under `dir`
///
/// Steps run strictly in order: private key, public key, encoding,
/// formatting, public file, private file.
pub fn generate_credential<R: RngCore + CryptoRng>(
    generator: &mut KeyGenerator<R>,
    name: &str,
    onion_address: &str,
    dir: &Path,
) -> Result<Credential> {
    let keypair = generator.generate_keypair()?;
    debug!("Generated x25519 keypair for {}", name);

    let encoded_public = keypair.public_key().encoded();
    let encoded_private = keypair.private_key().encoded();

    let public_line = format_public(&encoded_public);
    let private_line = format_private(onion_address, &encoded_private);

    let paths = CredentialPaths::new(dir, name);
    persist(&paths, &public_line, &private_line)?;

    Ok(Credential {
        name: name.to_string(),
        encoded_public,
        encoded_private,
        paths,
    })
}

impl Credential {
    /// Print the four confirmation lines
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        report(
            out,
            &self.name,
            &self.encoded_public,
            &self.encoded_private,
            &self.paths,
        )
    }
}

/// Write the two keys and both file paths, one per line
pub fn report<W: Write>(
    out: &mut W,
    name: &str,
    encoded_public: &str,
    encoded_private: &str,
    paths: &CredentialPaths,
) -> io::Result<()> {
    writeln!(out, "{} public key:  {}", name, encoded_public)?;
    writeln!(out, "{} private key: {}", name, encoded_private)?;
    writeln!(out, "Public key saved to {}", paths.public.display())?;
    writeln!(out, "Private key saved to {}", paths.private.display())?;
    out.flush()
}
