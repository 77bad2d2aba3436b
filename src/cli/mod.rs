// src/cli/mod.rs
use std::num::IntErrorKind;

use clap::Parser;
use thiserror::Error;

use crate::core::config::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::models::PasswordConfig;

pub mod handlers;

pub use handlers::{report_failure, run, ExitStatus};

#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    author,
    version,
    about = "Generate a cryptographically secure password.",
    long_about = None
)]
pub struct Args {
    /// Number of characters in the password (8-128, default: 16)
    #[arg(long, value_name = "N", allow_negative_numbers = true, value_parser = parse_length)]
    pub length: Option<i64>,

    /// Exclude symbol characters from the password
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude numeric characters from the password
    #[arg(long)]
    pub no_numbers: bool,
}

/// Parses `--length`, saturating integers too large for `i64` so they
/// fail the range check instead of the parser.
fn parse_length(value: &str) -> Result<i64, String> {
    match value.trim().parse::<i64>() {
        Ok(length) => Ok(length),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(format!("invalid integer: {}", e)),
        },
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("--length must be at least 8.")]
    LengthTooShort,

    #[error("--length must be at most 128.")]
    LengthTooLong,
}

impl Args {
    /// Range-checks the arguments and turns them into a generator config.
    ///
    /// `default_length` applies when `--length` was not given.
    pub fn password_config(&self, default_length: usize) -> Result<PasswordConfig, ValidationError> {
        let length = match self.length {
            Some(length) if length < MIN_PASSWORD_LENGTH as i64 => {
                return Err(ValidationError::LengthTooShort)
            }
            Some(length) if length > MAX_PASSWORD_LENGTH as i64 => {
                return Err(ValidationError::LengthTooLong)
            }
            Some(length) => length as usize,
            None if default_length < MIN_PASSWORD_LENGTH => {
                return Err(ValidationError::LengthTooShort)
            }
            None if default_length > MAX_PASSWORD_LENGTH => {
                return Err(ValidationError::LengthTooLong)
            }
            None => default_length,
        };

        Ok(PasswordConfig {
            length,
            include_symbols: !self.no_symbols,
            include_numbers: !self.no_numbers,
        })
    }
}
