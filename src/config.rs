// src/config.rs
//! Configuration for the `ecdh-check` binary.
//!
//! Sources, lowest precedence first:
//! 1. optional `ecdh-check.{toml,json,yaml}` in the working directory
//! 2. `ECDH_CHECK_*` environment variables (a `.env` file is loaded first)
//! 3. command-line arguments (`input`, `--pretty`)

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for checking a single request payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckerConfig {
    /// Payload file to read; stdin when unset
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Print the canonical encoding indented
    #[serde(default)]
    pub pretty: bool,
}

impl CheckerConfig {
    /// Builds the configuration from file, environment and command-line overrides.
    ///
    /// # Arguments
    /// * `input` - Payload path given on the command line, if any
    /// * `pretty` - `Some(true)` when `--pretty` was passed; `None` keeps the lower sources
    ///
    /// # Errors
    /// Returns `ConfigError` if a source cannot be parsed or a value has the wrong type.
    pub fn load(input: Option<String>, pretty: Option<bool>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("ecdh-check").required(false))
            .add_source(Environment::with_prefix("ECDH_CHECK"))
            .set_override_option("input", input)?
            .set_override_option("pretty", pretty)?
            .build()?
            .try_deserialize()
    }
}
