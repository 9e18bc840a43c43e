//! EC2: the query protocol plus a generic `dryRun` method.

use decl::{args, ClassName, CodeBlock, FieldDecl, MethodDecl, Modifier, ParameterDecl, TypeName};
use model::{OperationModel, ProtocolKind, ServiceModel};

use super::dry_run::{SIGNALS, UNRECOGNIZED_RESPONSE};
use super::query_xml::{inline_error_response_handler, QueryXmlProtocolSpec};
use super::{ProtocolSpec, CLIENT_HANDLER, ERROR_RESPONSE_HANDLER, RESPONSE_HANDLER};
use crate::{runtime, Result};

/// Name of the synthesized dry-run method.
pub const DRY_RUN_METHOD: &str = "dryRun";

/// Strategy for EC2 services.
///
/// Everything but [`additional_methods`](ProtocolSpec::additional_methods) is
/// delegated to the wrapped query strategy.
#[derive(Debug)]
pub struct Ec2ProtocolSpec<'a> {
    query: QueryXmlProtocolSpec<'a>,
}

impl<'a> Ec2ProtocolSpec<'a> {
    /// Bind the strategy to `model`.
    pub fn new(model: &'a ServiceModel) -> Result<Self> {
        Ok(Self { query: QueryXmlProtocolSpec::new(model)? })
    }

    /// `public <X extends AmazonWebServiceRequest> DryRunResult<X> dryRun(DryRunSupportedRequest<X> request)`
    fn dry_run_method(&self) -> Result<MethodDecl> {
        let names = self.query.names();
        let x = TypeName::type_variable("X");
        let result = TypeName::parameterized(names.model_class("DryRunResult"), vec![x.clone()]);
        let supported_request =
            TypeName::parameterized(names.model_class("DryRunSupportedRequest"), vec![x.clone()]);
        let request = TypeName::parameterized(runtime::request(), vec![x]);
        let void = ClassName::java_lang("Void");
        let void_handler =
            TypeName::parameterized(runtime::stax_response_handler(), vec![(&void).into()]);
        let void_unmarshaller =
            TypeName::parameterized(runtime::void_stax_unmarshaller(), vec![(&void).into()]);
        let params = TypeName::parameterized(
            runtime::client_execution_params(),
            vec![
                request.clone(),
                TypeName::parameterized(runtime::amazon_web_service_response(), vec![void.into()]),
            ],
        );

        let mut method = MethodDecl::builder(DRY_RUN_METHOD)
            .add_modifiers([Modifier::Public])
            .add_type_variable(TypeName::bounded_type_variable(
                "X",
                runtime::amazon_web_service_request(),
            ))
            .returns(result.clone())
            .add_parameter(ParameterDecl::new(supported_request, "request"))
            .add_exception(runtime::amazon_service_exception())
            .add_exception(runtime::amazon_client_exception())
            .add_statement("$T dryRunRequest = request.getDryRunRequest()", args![request])
            .add_statement(
                "$T $N = new $T(new $T())",
                args![&void_handler, RESPONSE_HANDLER, &void_handler, void_unmarshaller],
            )
            .add_code(inline_error_response_handler()?)
            .begin_control_flow("try", args![])
            .add_code_fmt("$N.execute(new $T()\n", args![CLIENT_HANDLER, params])
            .add_code_fmt("$>$>.withMarshaller(input -> input)\n", args![])
            .add_code_fmt(".withResponseHandler($N)\n", args![RESPONSE_HANDLER])
            .add_code_fmt(".withErrorResponseHandler($N)\n", args![ERROR_RESPONSE_HANDLER])
            .add_code_fmt(".withInput(dryRunRequest));\n$<$<", args![])
            .add_statement(
                "throw new $T($S)",
                args![runtime::amazon_client_exception(), UNRECOGNIZED_RESPONSE],
            )
            .next_control_flow("catch ($T ase)", args![runtime::amazon_service_exception()]);

        for (i, signal) in SIGNALS.iter().enumerate() {
            let condition = "ase.getErrorCode().equals($S) && ase.getStatusCode() == $L";
            let condition_args = args![signal.error_code, signal.status_code];
            method = if i == 0 {
                method.begin_control_flow(&format!("if ({condition})"), condition_args)
            } else {
                method.next_control_flow(&format!("else if ({condition})"), condition_args)
            };
            method = method.add_statement(
                "return new $T($L, request, ase.getMessage(), ase)",
                args![&result, signal.would_succeed],
            );
        }

        Ok(method
            .end_control_flow()
            .add_statement(
                "throw new $T($S, ase)",
                args![runtime::amazon_client_exception(), UNRECOGNIZED_RESPONSE],
            )
            .end_control_flow()
            .build()?)
    }
}

impl ProtocolSpec for Ec2ProtocolSpec<'_> {
    fn kind(&self) -> ProtocolKind { ProtocolKind::Ec2 }

    fn name(&self) -> &'static str { "ec2" }

    fn protocol_factory_field(&self) -> FieldDecl { self.query.protocol_factory_field() }

    fn protocol_factory_init(&self) -> Result<MethodDecl> { self.query.protocol_factory_init() }

    fn response_handler(&self, operation: &OperationModel) -> Result<CodeBlock> {
        self.query.response_handler(operation)
    }

    fn error_response_handler(&self, operation: &OperationModel) -> Result<CodeBlock> {
        self.query.error_response_handler(operation)
    }

    fn execution_call(&self, operation: &OperationModel) -> Result<CodeBlock> {
        self.query.execution_call(operation)
    }

    fn error_response_handler_method(&self) -> Result<Option<MethodDecl>> {
        self.query.error_response_handler_method()
    }

    fn additional_methods(&self) -> Result<Vec<MethodDecl>> { Ok(vec![self.dry_run_method()?]) }

    fn client_handler_type(&self) -> ClassName { self.query.client_handler_type() }
}

#[cfg(test)]
mod tests {
    use model::ServiceMetadata;

    use super::*;

    #[test]
    fn test_single_dry_run_method() {
        let model = ServiceModel::builder()
            .metadata(ServiceMetadata::new("Ec2", "p", ProtocolKind::Ec2))
            .build()
            .expect("model");
        let spec = Ec2ProtocolSpec::new(&model).expect("spec");
        let methods = spec.additional_methods().expect("methods");
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name(), DRY_RUN_METHOD);
        assert!(methods[0].has_modifier(Modifier::Public));
    }
}
