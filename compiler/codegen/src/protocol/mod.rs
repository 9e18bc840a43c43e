//! Protocol strategies.
//!
//! A [`ProtocolSpec`] supplies every protocol-dependent piece of the sync
//! client: the field holding the protocol runtime, its initializer, the three
//! statements of each operation method, and any protocol-only methods.
//! [`resolve`] maps each [`ProtocolKind`] to exactly one strategy.

use decl::{args, ClassName, CodeBlock, FieldDecl, MethodDecl, TypeName};
use model::{OperationModel, ProtocolKind, ServiceModel};
use tracing::debug;

use crate::naming::OperationTypes;
use crate::{runtime, CodegenError, Result};

pub mod api_gateway;
pub mod dry_run;
pub mod ec2;
pub mod json;
pub mod query_xml;

pub use api_gateway::ApiGatewayProtocolSpec;
pub use ec2::Ec2ProtocolSpec;
pub use json::JsonProtocolSpec;
pub use query_xml::QueryXmlProtocolSpec;

/// Name of the protocol factory field.
pub const PROTOCOL_FACTORY: &str = "protocolFactory";
/// Name of the execution handler field.
pub const CLIENT_HANDLER: &str = "clientHandler";
/// Name of the private initializer that populates the protocol field.
pub const INIT_METHOD: &str = "init";
/// Name of the private helper building JSON error handlers.
pub const CREATE_ERROR_RESPONSE_HANDLER: &str = "createErrorResponseHandler";
/// Local variable holding the success handler.
pub const RESPONSE_HANDLER: &str = "responseHandler";
/// Local variable holding the error handler.
pub const ERROR_RESPONSE_HANDLER: &str = "errorResponseHandler";

/// Protocol-dependent parts of a generated sync client.
///
/// A strategy is bound to one service model when it is created, so none of
/// the methods take the model again.
pub trait ProtocolSpec {
    /// Protocol this strategy was resolved for.
    fn kind(&self) -> ProtocolKind;

    /// Short name of the strategy, for logs and inspection.
    fn name(&self) -> &'static str;

    /// The private field holding the protocol runtime.
    fn protocol_factory_field(&self) -> FieldDecl;

    /// The private initializer assigned to the protocol field from every
    /// constructor.
    fn protocol_factory_init(&self) -> Result<MethodDecl>;

    /// Statement declaring the success-path handler of `operation`.
    fn response_handler(&self, operation: &OperationModel) -> Result<CodeBlock>;

    /// Statement declaring the error-path handler of `operation`.
    fn error_response_handler(&self, operation: &OperationModel) -> Result<CodeBlock>;

    /// The final statement of the operation method.
    fn execution_call(&self, operation: &OperationModel) -> Result<CodeBlock>;

    /// The private helper referenced by [`error_response_handler`](Self::error_response_handler),
    /// for protocols that use one.
    fn error_response_handler_method(&self) -> Result<Option<MethodDecl>>;

    /// Protocol-only methods appended to the client.
    fn additional_methods(&self) -> Result<Vec<MethodDecl>> { Ok(Vec::new()) }

    /// Execution handler class the constructors instantiate.
    fn client_handler_type(&self) -> ClassName { runtime::sdk_client_handler() }
}

/// Select the strategy for `kind`, bound to `model`.
pub fn resolve<'a>(kind: ProtocolKind, model: &'a ServiceModel) -> Result<Box<dyn ProtocolSpec + 'a>> {
    let spec: Box<dyn ProtocolSpec + 'a> = match kind {
        ProtocolKind::Json | ProtocolKind::RestJson | ProtocolKind::Cbor | ProtocolKind::Ion => {
            Box::new(JsonProtocolSpec::new(model)?)
        }
        ProtocolKind::Query | ProtocolKind::RestXml => Box::new(QueryXmlProtocolSpec::new(model)?),
        ProtocolKind::Ec2 => Box::new(Ec2ProtocolSpec::new(model)?),
        ProtocolKind::ApiGateway => Box::new(ApiGatewayProtocolSpec::new(model)?),
    };
    debug!(protocol = %kind, strategy = spec.name(), "resolved protocol strategy");
    Ok(spec)
}

/// Select the strategy for a protocol given by its wire name.
pub fn resolve_by_name<'a>(name: &str, model: &'a ServiceModel) -> Result<Box<dyn ProtocolSpec + 'a>> {
    let kind = name
        .parse::<ProtocolKind>()
        .map_err(|_| CodegenError::UnknownProtocol(name.to_string()))?;
    resolve(kind, model)
}

/// How an execution call unwraps the runtime's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Envelope {
    /// The runtime wraps results; the call ends in `.getResult()`.
    Unwrap,
    /// The runtime returns the result type directly.
    None,
}

impl Envelope {
    /// Type the response handler produces for `response`.
    pub(crate) fn handled_type(self, response: &ClassName) -> TypeName {
        match self {
            Envelope::Unwrap => TypeName::parameterized(
                runtime::amazon_web_service_response(),
                vec![response.into()],
            ),
            Envelope::None => response.into(),
        }
    }
}

/// `return clientHandler.execute(...)` shared by every protocol.
///
/// `marshaller_arg` is passed to the marshaller's constructor.
pub(crate) fn execution_call(
    types: &OperationTypes,
    envelope: Envelope,
    marshaller_arg: &str,
) -> Result<CodeBlock> {
    let params = TypeName::parameterized(
        runtime::client_execution_params(),
        vec![(&types.request).into(), envelope.handled_type(&types.response)],
    );
    let unwrap = match envelope {
        Envelope::Unwrap => ".getResult()",
        Envelope::None => "",
    };
    Ok(CodeBlock::builder()
        .add("return $N.execute(new $T()\n", args![CLIENT_HANDLER, params])
        .add("$>$>.withMarshaller(new $T($L))\n", args![&types.marshaller, marshaller_arg])
        .add(".withResponseHandler($N)\n", args![RESPONSE_HANDLER])
        .add(".withErrorResponseHandler($N)\n", args![ERROR_RESPONSE_HANDLER])
        .add(".withInput($N))$L;\n$<$<", args![&types.input_name, unwrap])
        .build()?)
}

/// `HttpResponseHandler<E> errorResponseHandler = createErrorResponseHandler();`
pub(crate) fn delegated_error_response_handler(error_type: ClassName) -> Result<CodeBlock> {
    let handler = TypeName::parameterized(runtime::http_response_handler(), vec![error_type.into()]);
    Ok(CodeBlock::of(
        "$T $N = $N();\n",
        args![handler, ERROR_RESPONSE_HANDLER, CREATE_ERROR_RESPONSE_HANDLER],
    )?)
}

/// Flags of the JSON operation metadata for `operation`: whether the payload
/// is JSON and whether the success response streams.
///
/// A blob that is the whole request or response payload is not JSON.
pub(crate) fn payload_flags(model: &ServiceModel, operation: &OperationModel) -> (bool, bool) {
    let input = model.operation_input_shape(operation);
    let output = model.operation_output_shape(operation);
    let blob_payload = input.into_iter().chain(output).any(|shape| shape.has_blob_member_as_payload);
    let streaming = output.is_some_and(|shape| shape.has_streaming_member);
    (!blob_payload, streaming)
}

#[cfg(test)]
mod tests {
    use model::ServiceMetadata;

    use super::*;

    #[test]
    fn test_resolve_is_total() {
        for kind in ProtocolKind::ALL {
            let model = ServiceModel::builder()
                .metadata(ServiceMetadata::new("Svc", "p", kind))
                .build()
                .expect("model");
            let spec = resolve(kind, &model).expect("strategy");
            assert_eq!(spec.kind(), kind);
        }
    }

    #[test]
    fn test_resolve_by_unknown_name() {
        let model = ServiceModel::builder()
            .metadata(ServiceMetadata::new("Svc", "p", ProtocolKind::Json))
            .build()
            .expect("model");
        let err = resolve_by_name("smithy-rpc-v2", &model).err().expect("unknown protocol");
        assert!(matches!(err, CodegenError::UnknownProtocol(name) if name == "smithy-rpc-v2"));
    }
}
