//! Query and rest-xml: XML responses parsed by per-shape unmarshallers.

use decl::{args, ClassName, CodeBlock, FieldDecl, MethodDecl, Modifier, TypeName};
use model::{OperationModel, ProtocolKind, ServiceModel};

use super::{
    execution_call, Envelope, ProtocolSpec, ERROR_RESPONSE_HANDLER, INIT_METHOD, RESPONSE_HANDLER,
};
use crate::naming::ClientNames;
use crate::{runtime, Result};

/// Field holding the exception unmarshallers.
pub const EXCEPTION_UNMARSHALLERS: &str = "exceptionUnmarshallers";

/// Strategy for XML protocols.
///
/// There is no protocol factory: the client keeps the list of exception
/// unmarshallers and builds each handler inline.
#[derive(Debug)]
pub struct QueryXmlProtocolSpec<'a> {
    model: &'a ServiceModel,
    names: ClientNames,
}

impl<'a> QueryXmlProtocolSpec<'a> {
    /// Bind the strategy to `model`.
    pub fn new(model: &'a ServiceModel) -> Result<Self> {
        Ok(Self { model, names: ClientNames::new(model)? })
    }

    /// Names of the bound service.
    pub fn names(&self) -> &ClientNames { &self.names }

    /// `List<Unmarshaller<AmazonServiceException, Node>>`.
    fn unmarshaller_list() -> TypeName {
        let unmarshaller = TypeName::parameterized(
            runtime::unmarshaller(),
            vec![runtime::amazon_service_exception().into(), runtime::node().into()],
        );
        TypeName::parameterized(runtime::list(), vec![unmarshaller])
    }
}

/// `DefaultErrorResponseHandler errorResponseHandler = new DefaultErrorResponseHandler(exceptionUnmarshallers);`
pub(crate) fn inline_error_response_handler() -> Result<CodeBlock> {
    Ok(CodeBlock::of(
        "$T $N = new $T($N);\n",
        args![
            runtime::default_error_response_handler(),
            ERROR_RESPONSE_HANDLER,
            runtime::default_error_response_handler(),
            EXCEPTION_UNMARSHALLERS
        ],
    )?)
}

impl ProtocolSpec for QueryXmlProtocolSpec<'_> {
    fn kind(&self) -> ProtocolKind { self.model.protocol() }

    fn name(&self) -> &'static str { "query-xml" }

    fn protocol_factory_field(&self) -> FieldDecl {
        FieldDecl::builder(Self::unmarshaller_list(), EXCEPTION_UNMARSHALLERS)
            .add_modifiers([Modifier::Private, Modifier::Final])
            .build()
    }

    fn protocol_factory_init(&self) -> Result<MethodDecl> {
        let list = Self::unmarshaller_list();
        let mut method = MethodDecl::builder(INIT_METHOD)
            .add_modifiers([Modifier::Private])
            .returns(list.clone())
            .add_statement("$T unmarshallers = new $T<>()", args![list, runtime::array_list()]);
        for shape in self.model.exceptions() {
            method = method.add_statement(
                "unmarshallers.add(new $T())",
                args![self.names.exception_unmarshaller(shape)?],
            );
        }
        Ok(method
            .add_statement(
                "unmarshallers.add(new $T($T.class))",
                args![runtime::standard_error_unmarshaller(), self.names.base_exception()],
            )
            .add_statement("return unmarshallers", args![])
            .build()?)
    }

    fn response_handler(&self, operation: &OperationModel) -> Result<CodeBlock> {
        let types = self.names.operation(operation)?;
        let handler = TypeName::parameterized(
            runtime::stax_response_handler(),
            vec![(&types.response).into()],
        );
        Ok(CodeBlock::builder()
            .add("$T $N = new $T(\n$>$>", args![&handler, RESPONSE_HANDLER, &handler])
            .add("new $T());\n$<$<", args![&types.unmarshaller])
            .build()?)
    }

    fn error_response_handler(&self, _operation: &OperationModel) -> Result<CodeBlock> {
        inline_error_response_handler()
    }

    fn execution_call(&self, operation: &OperationModel) -> Result<CodeBlock> {
        execution_call(&self.names.operation(operation)?, Envelope::Unwrap, "")
    }

    fn error_response_handler_method(&self) -> Result<Option<MethodDecl>> { Ok(None) }

    fn client_handler_type(&self) -> ClassName { runtime::sdk_client_handler() }
}
