//! Command-line interface for onion-auth-keygen
//!
//! Exactly two positional arguments:
//! - `name` - label used in the output file names
//! - `onion_address` - service address, `.onion` suffix optional
//!
//! Only the argument count decides between running and the usage error.
//! Values starting with `-` are ordinary positionals; `--help` and
//! `--version` are recognised only as the sole argument.

use crate::error::KeygenError;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

const DEFAULT_PROGRAM: &str = "onion-auth-keygen";

/// Generate an x25519 client authorization keypair for a v3 Onion Service
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "onion-auth-keygen")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Credential name; writes <name>.auth and <name>_onion.auth_private
    #[arg(allow_hyphen_values = true)]
    pub name: String,

    /// Onion service address the credential unlocks
    #[arg(allow_hyphen_values = true)]
    pub onion_address: String,
}

/// Result of reading the command line
#[derive(Debug)]
pub enum ParseOutcome {
    /// Two positional arguments were given
    Run(Cli),
    /// Wrong argument count
    Usage(KeygenError),
    /// Sole `--help` / `--version`; text for stdout, exit 0
    Info(String),
    /// Two arguments that are not valid UTF-8
    Invalid(clap::Error),
}

/// Parse `args`, where the first item is the program name
pub fn parse_from<I, T>(args: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    if args.len() == 2 {
        match args[1].to_str() {
            Some("-h" | "--help") => {
                return ParseOutcome::Info(Cli::command().render_help().to_string())
            },
            Some("-V" | "--version") => {
                return ParseOutcome::Info(Cli::command().render_version())
            },
            _ => {},
        }
    }

    if args.len() != 3 {
        return ParseOutcome::Usage(KeygenError::Usage { program });
    }

    // `--` keeps clap from reading either value as a flag
    let escaped = [
        args[0].clone(),
        OsString::from("--"),
        args[1].clone(),
        args[2].clone(),
    ];
    match Cli::try_parse_from(escaped) {
        Ok(cli) => ParseOutcome::Run(cli),
        Err(err) => ParseOutcome::Invalid(err),
    }
}
