#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Quill service model
//!
//! This crate defines the read-only description of one service that every code
//! generator consumes: its operations, shapes, protocol metadata and the
//! customization knobs that change the shape of the generated client.
//!
//! The model is loaded once (from the JSON intermediate-model document or via
//! [`ServiceModelBuilder`]) and is never mutated afterwards. Generators only ever
//! receive `&ServiceModel`.

use thiserror::Error;

pub mod naming;
pub mod operation;
pub mod protocol;
pub mod service;
pub mod shape;

pub use operation::{OperationModel, VariableModel};
pub use protocol::{ProtocolKind, SignatureVersion};
pub use service::{CustomizationConfig, ServiceMetadata, ServiceModel, ServiceModelBuilder};
pub use shape::{ShapeModel, ShapeType};

/// Errors raised while loading or assembling a service model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Underlying I/O error while reading the model document.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The model document is not valid JSON or does not match the model layout.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The declared wire protocol is not one of the supported protocol kinds.
    #[error("Unknown protocol: {0}")]
    UnknownProtocol(String),
    /// A required part of the model was not supplied.
    #[error("Missing required model data: {0}")]
    Missing(String),
}

/// Convenient result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
