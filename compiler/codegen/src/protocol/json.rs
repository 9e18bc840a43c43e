//! JSON family: json, rest-json, cbor and ion.

use decl::{args, ClassName, CodeBlock, FieldDecl, MethodDecl, Modifier, TypeName};
use model::{OperationModel, ProtocolKind, ServiceModel};

use super::{
    delegated_error_response_handler, execution_call, payload_flags, Envelope, ProtocolSpec,
    CREATE_ERROR_RESPONSE_HANDLER, INIT_METHOD, PROTOCOL_FACTORY, RESPONSE_HANDLER,
};
use crate::naming::ClientNames;
use crate::{runtime, CodegenError, Result};

/// Strategy for services built on the JSON protocol factory.
#[derive(Debug)]
pub struct JsonProtocolSpec<'a> {
    model: &'a ServiceModel,
    names: ClientNames,
}

impl<'a> JsonProtocolSpec<'a> {
    /// Bind the strategy to `model`.
    pub fn new(model: &'a ServiceModel) -> Result<Self> {
        Ok(Self { model, names: ClientNames::new(model)? })
    }
}

/// The `JsonClientMetadata` settings chain: protocol flags, base exception,
/// content type and one `addErrorMetadata` per exception shape in model order.
pub(crate) fn client_metadata_settings(
    model: &ServiceModel,
    names: &ClientNames,
    version: &str,
    supports_cbor: bool,
    supports_ion: bool,
) -> Result<CodeBlock> {
    let mut settings = vec![
        CodeBlock::of(".withProtocolVersion($S)", args![version])?,
        CodeBlock::of(".withSupportsCbor($L)", args![supports_cbor])?,
        CodeBlock::of(".withSupportsIon($L)", args![supports_ion])?,
        CodeBlock::of(".withBaseServiceExceptionClass($T.class)", args![names.base_exception()])?,
    ];
    if let Some(content_type) = &model.metadata().content_type {
        settings.push(CodeBlock::of(".withContentTypeOverride($S)", args![content_type])?);
    }
    for shape in model.exceptions() {
        settings.push(CodeBlock::of(
            ".addErrorMetadata(new $T().withErrorCode($S).withModeledClass($T.class))",
            args![
                runtime::json_error_shape_metadata(),
                shape.error_code_or_name(),
                names.exception(shape)?
            ],
        )?);
    }
    Ok(CodeBlock::join(settings, "\n"))
}

impl ProtocolSpec for JsonProtocolSpec<'_> {
    fn kind(&self) -> ProtocolKind { self.model.protocol() }

    fn name(&self) -> &'static str { "json" }

    fn protocol_factory_field(&self) -> FieldDecl {
        FieldDecl::builder(runtime::sdk_json_protocol_factory(), PROTOCOL_FACTORY)
            .add_modifiers([Modifier::Private, Modifier::Final])
            .build()
    }

    fn protocol_factory_init(&self) -> Result<MethodDecl> {
        let version = self
            .model
            .json_version()
            .ok_or_else(|| CodegenError::MissingModelData("jsonVersion".to_string()))?;

        let settings = client_metadata_settings(
            self.model,
            &self.names,
            version,
            self.model.is_cbor_protocol(),
            self.model.is_ion_protocol(),
        )?;

        Ok(MethodDecl::builder(INIT_METHOD)
            .add_modifiers([Modifier::Private])
            .returns(runtime::sdk_json_protocol_factory())
            .add_code_fmt(
                "return new $T(new $T()\n$>$>",
                args![runtime::sdk_json_protocol_factory(), runtime::json_client_metadata()],
            )
            .add_code_fmt("$L);\n$<$<", args![settings])
            .build()?)
    }

    fn response_handler(&self, operation: &OperationModel) -> Result<CodeBlock> {
        let types = self.names.operation(operation)?;
        let (payload_json, streaming) = payload_flags(self.model, operation);
        let handler = TypeName::parameterized(
            runtime::http_response_handler(),
            vec![Envelope::Unwrap.handled_type(&types.response)],
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
        delegated_error_response_handler(runtime::amazon_service_exception())
    }

    fn execution_call(&self, operation: &OperationModel) -> Result<CodeBlock> {
        execution_call(&self.names.operation(operation)?, Envelope::Unwrap, PROTOCOL_FACTORY)
    }

    fn error_response_handler_method(&self) -> Result<Option<MethodDecl>> {
        let handler = TypeName::parameterized(
            runtime::http_response_handler(),
            vec![runtime::amazon_service_exception().into()],
        );
        let method = MethodDecl::builder(CREATE_ERROR_RESPONSE_HANDLER)
            .add_modifiers([Modifier::Private])
            .returns(handler)
            .add_statement(
                "return $N.createErrorResponseHandler(new $T())",
                args![PROTOCOL_FACTORY, runtime::json_error_response_metadata()],
            )
            .build()?;
        Ok(Some(method))
    }

    fn client_handler_type(&self) -> ClassName { runtime::sdk_client_handler() }
}
