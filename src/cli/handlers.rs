// src/cli/handlers.rs
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::cli::Args;
use crate::core::config::Config;
use crate::crypto::RandomSource;
use crate::generators::{generate_password, GeneratorError};
use crate::system::ClipboardSink;

/// Process exit status of a `passgen` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    ValidationError,
    ClipboardFailure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::ValidationError => 1,
            ExitStatus::ClipboardFailure => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Generates one password and hands it to the terminal and the clipboard.
///
/// The password goes to `out` followed by a single newline and nothing
/// else is ever written there. Status lines go to `err`. Errors returned
/// here are I/O failures on the streams or a broken randomness source.
pub fn run<R, C, O, E>(
    args: &Args,
    config: &Config,
    rng: &mut R,
    clipboard: &mut C,
    out: &mut O,
    err: &mut E,
) -> Result<ExitStatus>
where
    R: RandomSource,
    C: ClipboardSink,
    O: Write,
    E: Write,
{
    let password_config = match args.password_config(config.default_password_length) {
        Ok(password_config) => password_config,
        Err(e) => {
            log::debug!("Rejected arguments: {:?}", args);
            writeln!(err, "Error: {}", e)?;
            return Ok(ExitStatus::ValidationError);
        }
    };

    log::debug!(
        "Generating password: length={}, symbols={}, numbers={}",
        password_config.length,
        password_config.include_symbols,
        password_config.include_numbers
    );

    let password = match generate_password(&password_config, rng) {
        Ok(password) => password,
        Err(e @ GeneratorError::LengthTooSmall { .. }) => {
            writeln!(err, "Error: {}", e)?;
            return Ok(ExitStatus::ValidationError);
        }
        Err(e @ GeneratorError::Random(_)) => {
            return Err(e).context("password generation failed");
        }
    };

    writeln!(out, "{}", password.as_str()).context("failed to write password")?;
    out.flush()?;

    match clipboard.copy(password.as_str()) {
        Ok(()) => {
            log::info!("Copied {} characters to clipboard", password.len());
            writeln!(err, "Password copied to clipboard.")?;
            Ok(ExitStatus::Success)
        }
        Err(e) => {
            log::info!("{}", e);
            writeln!(
                err,
                "Warning: could not copy to clipboard - paste from terminal output."
            )?;
            Ok(ExitStatus::ClipboardFailure)
        }
    }
}

/// Writes a fatal `run` error to `err` as a single line.
pub fn report_failure<E: Write>(error: &anyhow::Error, err: &mut E) -> io::Result<()> {
    writeln!(err, "Error: {:#}", error)
}
