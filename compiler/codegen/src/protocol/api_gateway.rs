//! Services fronted by API Gateway.
//!
//! The wire format is JSON, but the runtime hands back unwrapped results and
//! reports errors as `SdkBaseException`.

use decl::{args, ClassName, CodeBlock, FieldDecl, MethodDecl, Modifier, ParameterDecl, TypeName};
use model::service::DEFAULT_JSON_VERSION;
use model::{OperationModel, ProtocolKind, ServiceModel};

use super::json::client_metadata_settings;
use super::{
    delegated_error_response_handler, execution_call, payload_flags, Envelope, ProtocolSpec,
    CREATE_ERROR_RESPONSE_HANDLER, INIT_METHOD, PROTOCOL_FACTORY, RESPONSE_HANDLER,
};
use crate::naming::ClientNames;
use crate::{runtime, Result};

/// Strategy for API Gateway services and their generated protocol factory.
#[derive(Debug)]
pub struct ApiGatewayProtocolSpec<'a> {
    model: &'a ServiceModel,
    names: ClientNames,
}

impl<'a> ApiGatewayProtocolSpec<'a> {
    /// Bind the strategy to `model`.
    pub fn new(model: &'a ServiceModel) -> Result<Self> {
        Ok(Self { model, names: ClientNames::new(model)? })
    }
}

impl ProtocolSpec for ApiGatewayProtocolSpec<'_> {
    fn kind(&self) -> ProtocolKind { ProtocolKind::ApiGateway }

    fn name(&self) -> &'static str { "api-gateway" }

    fn protocol_factory_field(&self) -> FieldDecl {
        FieldDecl::builder(self.names.protocol_factory(), PROTOCOL_FACTORY)
            .add_modifiers([Modifier::Private, Modifier::Final])
            .build()
    }

    fn protocol_factory_init(&self) -> Result<MethodDecl> {
        let factory = self.names.protocol_factory();
        let version = self.model.json_version().unwrap_or(DEFAULT_JSON_VERSION);

        let settings = client_metadata_settings(self.model, &self.names, version, false, false)?;

        Ok(MethodDecl::builder(INIT_METHOD)
            .add_modifiers([Modifier::Private])
            .returns(&factory)
            .add_code_fmt(
                "return new $T(new $T()\n$>$>",
                args![&factory, runtime::json_client_metadata()],
            )
            .add_code_fmt("$L);\n$<$<", args![settings])
            .build()?)
    }

    fn response_handler(&self, operation: &OperationModel) -> Result<CodeBlock> {
        let types = self.names.operation(operation)?;
        let (payload_json, streaming) = payload_flags(self.model, operation);
        let handler = TypeName::parameterized(
            runtime::http_response_handler(),
            vec![Envelope::None.handled_type(&types.response)],
        );
        Ok(CodeBlock::builder()
            .add(
                "$T $N = $N.createResponseHandler(\n$>$>",
                args![handler, RESPONSE_HANDLER, PROTOCOL_FACTORY],
            )
            .add(
                "new $T().withPayloadJson($L).withHasStreamingSuccessResponse($L),\n",
                args![runtime::json_operation_metadata(), payload_json, streaming],
            )
            .add("new $T());\n$<$<", args![&types.unmarshaller])
            .build()?)
    }

    fn error_response_handler(&self, _operation: &OperationModel) -> Result<CodeBlock> {
        delegated_error_response_handler(runtime::sdk_base_exception())
    }

    fn execution_call(&self, operation: &OperationModel) -> Result<CodeBlock> {
        execution_call(&self.names.operation(operation)?, Envelope::None, PROTOCOL_FACTORY)
    }

    fn error_response_handler_method(&self) -> Result<Option<MethodDecl>> {
        let handler = TypeName::parameterized(
            runtime::http_response_handler(),
            vec![runtime::sdk_base_exception().into()],
        );
        let shapes = TypeName::from(runtime::json_error_shape_metadata()).array_of();
        let method = MethodDecl::builder(CREATE_ERROR_RESPONSE_HANDLER)
            .add_modifiers([Modifier::Private])
            .returns(handler)
            .add_parameter(ParameterDecl::new(shapes, "errorShapeMetadata"))
            .varargs(true)
            .add_statement(
                "return $N.createErrorResponseHandler(new $T().withErrorShapes($T.asList(errorShapeMetadata)))",
                args![PROTOCOL_FACTORY, runtime::json_error_response_metadata(), runtime::arrays()],
            )
            .build()?;
        Ok(Some(method))
    }

    fn client_handler_type(&self) -> ClassName { runtime::api_gateway_client_handler() }
}

#[cfg(test)]
mod tests {
    use model::ServiceMetadata;

    use super::*;

    #[test]
    fn test_factory_is_generated_per_service() {
        let model = ServiceModel::builder()
            .metadata(ServiceMetadata::new("Pets", "p", ProtocolKind::ApiGateway))
            .build()
            .expect("model");
        let spec = ApiGatewayProtocolSpec::new(&model).expect("spec");
        let factory = TypeName::from(ClassName::new("p", "PetsProtocolFactory"));
        assert_eq!(spec.protocol_factory_field().type_name(), &factory);
        let init = spec.protocol_factory_init().expect("init").body().to_string();
        assert!(init.starts_with("return new PetsProtocolFactory(new JsonClientMetadata()\n"));
        assert!(init.contains(".withProtocolVersion(\"1.1\")"));
        assert_eq!(
            spec.client_handler_type().canonical_name(),
            "software.amazon.awssdk.opensdk.protect.client.SdkClientHandler"
        );
    }
}
