#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that turns a service model into Java client sources.
//!
//! ## Module Organization
//!
//! - `generation_context` - the model plus output and emitter settings
//! - `orchestration` - entry points (`generate_service`, `plan`, `run`)
//! - `writer` - writing rendered files to disk

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the codegen pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required setting is absent.
    #[error("{0} is required")]
    Missing(&'static str),
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// The service model could not be loaded.
    #[error("Failed to load service model: {0}")]
    Model(#[from] model::ModelError),
    /// A compilation unit could not be rendered.
    #[error(transparent)]
    Decl(#[from] decl::DeclError),
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// I/O error while creating or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One rendered compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory, e.g. `com/example/FooClient.java`.
    pub path: PathBuf,
    /// Java source text.
    pub source: String,
}

pub mod generation_context;
pub mod orchestration;
pub mod writer;

pub use generation_context::GenerationContext;
pub use orchestration::{generate_service, plan, run, ServicePlan};
pub use writer::write_generated;
