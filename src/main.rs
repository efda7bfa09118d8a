//! onion-auth-keygen - client authorization keys for v3 Onion Services
//!
//! Generates an x25519 keypair and writes it in Tor's client authorization
//! format:
//! - `<name>.auth` goes in the service's `authorized_clients/` directory
//! - `<name>_onion.auth_private` goes in the client's `ClientOnionAuthDir`
//!
//! # Usage
//!
//! ```bash
//! onion-auth-keygen alice exampleonionaddress.onion
//! ```

#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use onion_auth_keygen::cli::{self, Cli, ParseOutcome};
use onion_auth_keygen::{auth, logging, util, VERSION};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    logging::init();

    let cli = match cli::parse_from(std::env::args_os()) {
        ParseOutcome::Run(cli) => cli,
        ParseOutcome::Usage(err) => {
            eprintln!("{}", err);
            return ExitCode::from(1);
        },
        ParseOutcome::Info(text) => {
            print!("{}", text);
            return ExitCode::SUCCESS;
        },
        ParseOutcome::Invalid(err) => {
            eprint!("{}", err);
            return ExitCode::from(1);
        },
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        },
    }
}

/// Generate, persist and report one credential in the working directory
fn run(cli: &Cli) -> Result<()> {
    debug!("onion-auth-keygen v{} starting", VERSION);

    let mut generator = util::rand::system_generator();
    let credential =
        auth::generate_credential(&mut generator, &cli.name, &cli.onion_address, Path::new(""))?;

    let stdout = io::stdout();
    credential
        .report(&mut stdout.lock())
        .context("Failed to write report to stdout")?;

    Ok(())
}
