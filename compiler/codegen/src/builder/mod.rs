//! Builders that configure and create the clients.
//!
//! `DefaultSBaseClientBuilder` carries everything shared by the sync and
//! async builders: endpoint prefix, signer and request-handler defaults, and
//! the advanced configuration when the service declares one.

mod async_builder;
mod base;
mod interface;
mod sync_builder;

pub use async_builder::AsyncClientBuilderClass;
pub use base::BaseClientBuilderClass;
pub use interface::{BuilderFlavour, ClientBuilderInterface};
pub use sync_builder::SyncClientBuilderClass;

use decl::TypeName;

use crate::client::ADVANCED_CONFIGURATION;

/// `B` and `C`, the builder and client type variables.
fn builder_and_client() -> (TypeName, TypeName) {
    (TypeName::type_variable("B"), TypeName::type_variable("C"))
}
