// src/logging/mod.rs
use env_logger::{Builder, Target};
use log::LevelFilter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Diagnostic logger writing to stderr, so stdout stays reserved for the
/// password itself.
pub fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .target(Target::Stderr);
    builder
}

pub fn init(level: LevelFilter) -> Result<()> {
    builder(level).try_init()?;
    log::debug!("Logging initialized at level {}", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        // Whichever call runs first in this process wins
        let _ = init(LevelFilter::Off);
        assert!(matches!(
            init(LevelFilter::Off),
            Err(LoggingError::AlreadyInitialized(_))
        ));
    }
}
