#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Java declarations as immutable values.
//!
//! Generators assemble [`TypeDecl`]s out of fields, methods and [`CodeBlock`]s and
//! hand them to [`JavaFile`] for rendering. Every builder in this crate is
//! consumed by value; once built, a declaration never changes.
//!
//! Code is written with a small format language:
//!
//! | placeholder | argument                   | output                        |
//! |-------------|----------------------------|-------------------------------|
//! | `$T`        | a type                     | simple or qualified type name |
//! | `$N`        | a name or a declaration    | the name                      |
//! | `$S`        | text                       | an escaped string literal     |
//! | `$L`        | text, a type, or code      | the argument verbatim         |
//! | `$>` `$<`   | none                       | indent / unindent             |
//! | `$$`        | none                       | a literal `$`                 |

use thiserror::Error;

pub mod code;
pub mod file;
pub mod name;
pub mod spec;
mod writer;

pub use code::{Arg, CodeBlock, CodeBlockBuilder};
pub use file::{JavaFile, DEFAULT_GENERATED_VALUE};
pub use name::{ClassName, TypeName};
pub use spec::{
    Annotation, FieldDecl, FieldDeclBuilder, MethodDecl, MethodDeclBuilder, Modifier,
    ParameterDecl, TypeDecl, TypeDeclBuilder, TypeKind,
};

/// Errors raised while assembling declarations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeclError {
    /// A `$` followed by a character that is not a known placeholder.
    #[error("Unknown placeholder '${placeholder}' in format \"{format}\"")]
    UnknownPlaceholder {
        /// The offending character.
        placeholder: char,
        /// The format string.
        format: String,
    },
    /// The number of placeholders and arguments differ.
    #[error("Format \"{format}\" expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        /// The format string.
        format: String,
        /// Placeholders consuming an argument.
        expected: usize,
        /// Arguments supplied.
        actual: usize,
    },
    /// An argument cannot be used for its placeholder, e.g. text passed to `$T`.
    #[error("Argument {index} cannot be used for '${placeholder}' in format \"{format}\"")]
    ArgumentKind {
        /// The placeholder.
        placeholder: char,
        /// Zero-based argument index.
        index: usize,
        /// The format string.
        format: String,
    },
    /// Control flow was closed without being opened, or left open.
    #[error("Unbalanced control flow: {0}")]
    UnbalancedControlFlow(String),
}

/// Convenient result type for declaration building.
pub type Result<T> = std::result::Result<T, DeclError>;

/// Build a list of format arguments.
///
/// ```
/// use decl::{args, ClassName, CodeBlock};
///
/// let list = ClassName::new("java.util", "List");
/// let code = CodeBlock::of("$T<$L> items", args![list, "String"]).expect("valid format");
/// assert_eq!(code.to_string(), "List<String> items");
/// ```
#[macro_export]
macro_rules! args {
    () => { ::std::vec::Vec::<$crate::Arg>::new() };
    ($($arg:expr),+ $(,)?) => { ::std::vec![$($crate::Arg::from($arg)),+] };
}
