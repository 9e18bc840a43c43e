//! Client classes and interfaces.
//!
//! The sync client is the only assembler that talks to a
//! [`ProtocolSpec`](crate::protocol::ProtocolSpec); the async client wraps it
//! and the interfaces only mirror its operations.

use model::OperationModel;

use crate::naming::OperationTypes;

pub mod async_client;
pub mod async_interface;
pub mod sync_client;
pub mod sync_interface;

pub use async_client::AsyncClientClass;
pub use async_interface::AsyncClientInterface;
pub use sync_client::SyncClientClass;
pub use sync_interface::SyncClientInterface;

/// Name of the client parameters constructor argument and field.
pub const CLIENT_PARAMS: &str = "clientParams";
/// Name of the advanced configuration constructor argument and field.
pub const ADVANCED_CONFIGURATION: &str = "advancedConfiguration";

/// Javadoc of an interface operation method.
pub(crate) fn operation_javadoc(operation: &OperationModel, types: &OperationTypes, returns: &str) -> String {
    let summary = match operation.documentation.as_deref().map(str::trim) {
        Some(documentation) if !documentation.is_empty() => documentation.to_string(),
        _ => format!("Invokes the {} operation.", operation.name),
    };
    format!(
        "{summary}\n\n@param {} the {} request\n@return {returns}",
        types.input_name, operation.name
    )
}
