#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Quill Configuration
//!
//! This crate provides configuration management for Quill.
//! A configuration file specifies:
//! - Where the service model is read from and where Java sources are written
//! - Logging configuration
//! - Emitter settings for the generated compilation units
//!
//! Configuration is stored in TOML format. Every section is optional; missing
//! values fall back to the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value of the `@Generated` annotation when the configuration does not set one.
pub const DEFAULT_GENERATED_VALUE: &str = "software.amazon.awssdk:codegen";

/// Directory generated sources go to when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "generated-src";

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Code generation settings
    #[serde(default)]
    pub codegen: CodegenConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Settings for rendering compilation units
    #[serde(default)]
    pub emitter: EmitterConfig,
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Path to the service model document
    pub model_path: Option<PathBuf>,
    /// Root directory of the generated Java sources
    #[serde(default = "Config::default_output_dir")]
    pub output_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file path (optional)
    pub file: Option<PathBuf>,
}

/// Emitter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Whether each type carries a `@Generated` annotation
    #[serde(default = "enabled")]
    pub generated_annotation: bool,
    /// Value of the `@Generated` annotation
    #[serde(default = "default_generated_value")]
    pub generated_value: String,
    /// Comment placed at the top of every file, e.g. a license header
    pub file_comment: Option<String>,
}

fn default_level() -> String { "info".to_string() }

fn enabled() -> bool { true }

fn default_generated_value() -> String { DEFAULT_GENERATED_VALUE.to_string() }

impl Default for CodegenConfig {
    fn default() -> Self { Self { model_path: None, output_dir: Config::default_output_dir() } }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: default_level(), file: None } }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            generated_annotation: true,
            generated_value: default_generated_value(),
            file_comment: None,
        }
    }
}

impl EmitterConfig {
    /// The annotation value to render, or `None` when annotations are disabled.
    pub fn generated_value(&self) -> Option<String> {
        self.generated_annotation.then(|| self.generated_value.clone())
    }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load the file at `path` if given, otherwise the default file when it
    /// exists, otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.exists() => Self::from_file(default),
            Ok(_) | Err(ConfigError::ConfigDirUnavailable) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/quill/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("quill");
        Ok(config_dir.join("config.toml"))
    }

    /// Get the default output directory for generated code
    pub fn default_output_dir() -> PathBuf {
        Self::default_output_dir_internal(std::env::current_dir().ok())
    }

    fn default_output_dir_internal(current_dir: Option<PathBuf>) -> PathBuf {
        match current_dir {
            Some(current_dir) => current_dir.join(DEFAULT_OUTPUT_DIR),
            None => PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
