#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for the generator.
//!
//! Library crates only emit `tracing` events; binaries call [`init`] once.
//! `RUST_LOG`, when set, takes precedence over the configured level.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level is not a valid filter directive
    #[error("Invalid log level '{level}': {source}")]
    InvalidLevel {
        /// The rejected level
        level: String,
        /// Parser error
        source: tracing_subscriber::filter::ParseError,
    },
    /// The log file could not be created
    #[error("Failed to open log file: {0}")]
    File(#[from] std::io::Error),
    /// A global subscriber is already installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter: `RUST_LOG` if it is set and valid, otherwise `level`.
pub fn filter(level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|source| LoggingError::InvalidLevel { level: level.to_string(), source })
}

/// Install the global subscriber, writing to `file` when given and to stderr
/// otherwise.
pub fn init(level: &str, file: Option<&Path>) -> Result<(), LoggingError> {
    let filter = filter(level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let result = match file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;
    tracing::debug!(level, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = filter("quill=loud").expect_err("directive should not parse");
        assert!(matches!(err, LoggingError::InvalidLevel { ref level, .. } if level == "quill=loud"));
    }

    #[test]
    fn test_init_writes_to_file_once() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("quill.log");
        init("debug", Some(&path)).expect("first init should succeed");
        assert!(path.exists());

        let again = init("debug", None).expect_err("second init should fail");
        assert!(matches!(again, LoggingError::AlreadyInitialized(_)));
    }
}
