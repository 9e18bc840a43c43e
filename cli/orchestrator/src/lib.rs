#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Command-line surface of Quill: argument parsing and the two subcommands.

use std::error::Error as StdError;
use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::Config;
use model::ServiceModel;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during Quill operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error")]
    Config(#[from] config::ConfigError),
    /// Logging could not be set up.
    #[error("Logging setup failed")]
    Logging(#[from] logging::LoggingError),
    /// The service model could not be read.
    #[error("Could not read service model")]
    Model(#[from] model::ModelError),
    /// Generation failed.
    #[error("Generation failed")]
    Pipeline(#[from] pipeline::PipelineError),
}

/// Result type alias for Quill operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Generate protocol-aware Java clients from service models.
#[derive(Debug, Parser)]
#[command(name = "quill", version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Quill subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the client family for a service model
    Generate {
        /// Service model document (JSON)
        #[arg(long)]
        model: PathBuf,
        /// Root directory of the generated sources
        #[arg(long)]
        output: Option<PathBuf>,
        /// Configuration file; the user config file is used when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Log level or filter directive, e.g. `debug`
        #[arg(long)]
        log_level: Option<String>,
    },
    /// Show what would be generated for a service model, without writing
    Inspect {
        /// Service model document (JSON)
        #[arg(long)]
        model: PathBuf,
    },
}

/// Merge command-line overrides into the loaded configuration.
pub fn resolve_config(
    model: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    log_level: Option<String>,
) -> Result<Config> {
    let mut resolved = Config::load(config.as_deref())?;
    resolved.codegen.model_path = Some(model);
    if let Some(output) = output {
        resolved.codegen.output_dir = output;
    }
    if let Some(level) = log_level {
        resolved.logging.level = level;
    }
    Ok(resolved)
}

/// Describe the types a model would generate.
pub fn inspect(model: &ServiceModel) -> Result<String> {
    let plan = pipeline::plan(model)?;
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "service:  {}", plan.service);
    let _ = writeln!(out, "protocol: {}", plan.protocol);
    let _ = writeln!(out, "strategy: {}", plan.strategy);
    let _ = writeln!(out, "types:");
    for class in &plan.types {
        let _ = writeln!(out, "  {}", class.canonical_name());
    }
    Ok(out)
}

/// Run one parsed command, printing its result to stdout.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate { model, output, config, log_level } => {
            let config = resolve_config(model, output, config, log_level)?;
            logging::init(&config.logging.level, config.logging.file.as_deref())?;
            let written = pipeline::run(&config)?;
            info!(files = written.len(), "done");
            for path in written {
                println!("{}", path.display());
            }
        }
        Command::Inspect { model } => {
            let model = ServiceModel::from_file(model)?;
            print!("{}", inspect(&model)?);
        }
    }
    Ok(())
}

/// The error and each of its causes, one per line.
pub fn error_chain(error: &dyn StdError) -> String {
    let mut out = format!("error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(out, "\n  caused by: {cause}");
        source = cause.source();
    }
    out
}
