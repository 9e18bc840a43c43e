#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Client code generation for service API models.
//!
//! This crate turns a read-only [`model::ServiceModel`] into Java type
//! declarations ([`decl::TypeDecl`]) for a protocol-aware client family:
//! the sync and async client classes and interfaces, plus the builders that
//! construct them.
//!
//! Everything that differs between wire protocols lives behind
//! [`protocol::ProtocolSpec`]. The assemblers in [`client`] and [`builder`]
//! never branch on the protocol themselves; they ask the strategy returned by
//! [`protocol::resolve`] for fields, statements and extra methods.
//!
//! Rendering the declarations to text and writing files belong to companion
//! crates.

pub mod builder;
pub mod client;
pub mod naming;
pub mod protocol;
pub mod runtime;

use decl::{ClassName, DeclError, TypeDecl};
use model::ModelError;
use thiserror::Error;

pub use builder::{
    AsyncClientBuilderClass, BaseClientBuilderClass, BuilderFlavour, ClientBuilderInterface,
    SyncClientBuilderClass,
};
pub use client::{AsyncClientClass, AsyncClientInterface, SyncClientClass, SyncClientInterface};
pub use naming::ClientNames;
pub use protocol::ProtocolSpec;

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The protocol named by the model has no strategy.
    #[error("Unknown protocol: {0}")]
    UnknownProtocol(String),
    /// The model lacks data a generator needs, or names a type that cannot be
    /// resolved.
    #[error("Missing required model data: {0}")]
    MissingModelData(String),
    /// A declaration could not be assembled.
    #[error(transparent)]
    Decl(#[from] DeclError),
    /// The model could not be read.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// A generator that produces exactly one top-level Java type.
pub trait ClassSpec {
    /// Fully-qualified name of the generated type.
    fn class_name(&self) -> ClassName;

    /// Assemble the type declaration.
    fn type_decl(&self) -> Result<TypeDecl>;
}
