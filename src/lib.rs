// SPDX-License-Identifier: CC0-1.0

//! Quill umbrella crate.
//!
//! This crate serves as the workspace root and re-exports the member crates
//! under one name. All functional code lives in the members under
//! `primitives/`, `compiler/` and `cli/`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use {codegen, decl, model, pipeline};

/// Miscellaneous metadata about the Quill workspace.
pub mod quill_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
