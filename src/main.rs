// src/main.rs

//! # ecdh-check - ECDH request payload checker
//!
//! Reads one ECDH request payload, decodes it, validates it and prints the
//! canonical encoding. Useful for checking client output before it reaches
//! the handshake handler.
//!
//! ## Usage
//! ```text
//! ecdh-check [--pretty] [PAYLOAD_FILE]
//! ```
//! Reads stdin when no file is given. `ecdh-check --help` lists all options.
//!
//! ## Environment Variables
//! - `ECDH_CHECK_INPUT`: payload file (overridden by the positional argument)
//! - `ECDH_CHECK_PRETTY`: print indented JSON when `true`
//! - `RUST_LOG`: log filter (default: `info`)

use anyhow::{Context, Result};
use clap::Parser;
use did_ecdh_request::config::CheckerConfig;
use did_ecdh_request::{EcdhRequest, Validate};
use dotenv::dotenv;
use log::{debug, error, info};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Payload file to check (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Print the canonical encoding indented
    #[arg(short, long)]
    pretty: bool,
}

impl Args {
    /// Splits the arguments into configuration overrides. An absent flag
    /// leaves the file and environment values in place.
    fn overrides(&self) -> (Option<String>, Option<bool>) {
        let input = self
            .input
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned());
        (input, self.pretty.then_some(true))
    }
}

/// Loads the payload named by the configuration, or stdin.
fn read_payload(config: &CheckerConfig) -> Result<Vec<u8>> {
    match &config.input {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read payload from {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read payload from stdin")?;
            Ok(buffer)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let (input, pretty) = args.overrides();
    let config =
        CheckerConfig::load(input, pretty).context("failed to load ecdh-check configuration")?;
    debug!("Loaded configuration: {:?}", config);

    let payload = read_payload(&config)?;
    let request = match EcdhRequest::decode(&payload) {
        Ok(request) => request,
        Err(e) => {
            error!("Payload rejected at decode: {}", e);
            return Ok(false);
        }
    };

    if let Err(e) = request.validate() {
        error!(
            "Payload rejected at validation: {}",
            e.scoped_message(EcdhRequest::MESSAGE_NAME)
        );
        return Ok(false);
    }

    let client = request.client.as_deref().unwrap_or_default();
    let curve = request.curve.map(|c| c.to_string()).unwrap_or_default();
    info!(
        "Valid ECDH request from {} on {} (candidate: {}, proof: {})",
        client,
        curve,
        request.candidate.is_some(),
        request.proof.is_some()
    );

    let encoded = if config.pretty {
        request.encode_pretty()?
    } else {
        String::from_utf8(request.encode()?).context("encoded request is not UTF-8")?
    };
    println!("{}", encoded);
    Ok(true)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Load environment variables from .env file
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
