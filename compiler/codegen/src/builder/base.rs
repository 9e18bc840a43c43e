//! The abstract base builder, `DefaultSBaseClientBuilder`.

use decl::{
    args, Annotation, ClassName, CodeBlock, FieldDecl, MethodDecl, Modifier, ParameterDecl,
    TypeDecl, TypeName,
};
use model::{ServiceModel, SignatureVersion};
use tracing::debug;

use super::{builder_and_client, ADVANCED_CONFIGURATION};
use crate::naming::ClientNames;
use crate::{runtime, ClassSpec, Result};

/// Assembles the base builder shared by the sync and async builders.
pub struct BaseClientBuilderClass<'a> {
    model: &'a ServiceModel,
    names: ClientNames,
    advanced_configuration: Option<ClassName>,
}

impl<'a> BaseClientBuilderClass<'a> {
    /// Prepare the assembler.
    pub fn new(model: &'a ServiceModel) -> Result<Self> {
        let names = ClientNames::new(model)?;
        let advanced_configuration = names.advanced_configuration(model)?;
        Ok(Self { model, names, advanced_configuration })
    }

    fn service_endpoint_prefix(&self) -> Result<MethodDecl> {
        Ok(MethodDecl::builder("serviceEndpointPrefix")
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Protected, Modifier::Final])
            .returns(ClassName::java_lang("String"))
            .add_statement("return $S", args![&self.model.metadata().endpoint_prefix])
            .build()?)
    }

    /// An anonymous `ClientConfigurationDefaults` overriding the security and
    /// listener defaults.
    fn service_defaults(&self) -> Result<MethodDecl> {
        let defaults = runtime::client_configuration_defaults();
        Ok(MethodDecl::builder("serviceDefaults")
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Protected, Modifier::Final])
            .returns(&defaults)
            .add_code_fmt("return new $T() {\n$>", args![&defaults])
            .add_code(self.security_defaults()?)
            .add_code_fmt("\n", args![])
            .add_code(self.listener_defaults()?)
            .add_code_fmt("$<};\n", args![])
            .build()?)
    }

    fn security_defaults(&self) -> Result<CodeBlock> {
        Ok(CodeBlock::builder()
            .add("@$T\n", args![ClassName::java_lang("Override")])
            .begin_control_flow(
                "protected void applySecurityDefaults($T builder)",
                args![runtime::client_security_configuration().nested("Builder")],
            )
            .add_statement(
                "builder.signerProvider(builder.signerProvider().orElseGet(this::defaultSignerProvider))",
                args![],
            )
            .end_control_flow()
            .add("\n", args![])
            .begin_control_flow("private $T defaultSignerProvider()", args![runtime::signer_provider()])
            .add_code(self.signer_definition()?)
            .end_control_flow()
            .build()?)
    }

    fn signer_definition(&self) -> Result<CodeBlock> {
        let metadata = self.model.metadata();
        match metadata.signature_version {
            SignatureVersion::V4 => Ok(CodeBlock::builder()
                .add_statement("$T signer = new $T()", args![runtime::aws4_signer(), runtime::aws4_signer()])
                .add_statement("signer.setServiceName($S)", args![metadata.signing_name()])
                .add_statement("signer.setRegionName(signingRegion())", args![])
                .add_statement("return new $T(signer)", args![runtime::static_signer_provider()])
                .build()?),
            SignatureVersion::V2 => Ok(CodeBlock::builder()
                .add_statement(
                    "return new $T(new $T())",
                    args![runtime::static_signer_provider(), runtime::query_string_signer()],
                )
                .build()?),
        }
    }

    /// Request handlers are discovered on the classpath next to the client.
    fn listener_defaults(&self) -> Result<CodeBlock> {
        let directory = self.names.client_package().replace('.', "/");
        let chain_factory = runtime::handler_chain_factory();
        Ok(CodeBlock::builder()
            .add("@$T\n", args![ClassName::java_lang("Override")])
            .begin_control_flow(
                "protected void applyListenerDefaults($T builder)",
                args![runtime::client_listener_configuration().nested("Builder")],
            )
            .add_statement("$T chainFactory = new $T()", args![&chain_factory, &chain_factory])
            .add_statement(
                "chainFactory.newRequestHandlerChain($S).forEach(builder::addRequestListener)",
                args![format!("/{directory}/request.handlers")],
            )
            .add_statement(
                "chainFactory.newRequestHandler2Chain($S).forEach(builder::addRequestListener)",
                args![format!("/{directory}/request.handler2s")],
            )
            .end_control_flow()
            .build()?)
    }

    /// The expression is taken verbatim from the customization.
    fn service_specific_http_config(&self, expression: &str) -> Result<MethodDecl> {
        Ok(MethodDecl::builder("serviceSpecificHttpConfig")
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Protected, Modifier::Final])
            .returns(runtime::sdk_http_configuration_options())
            .add_statement("return $L", args![expression])
            .build()?)
    }

    fn advanced_configuration_methods(&self, advanced: &ClassName) -> Result<Vec<MethodDecl>> {
        let (builder, _) = builder_and_client();
        let setter = MethodDecl::builder(ADVANCED_CONFIGURATION)
            .add_modifiers([Modifier::Public])
            .returns(builder)
            .add_parameter(ParameterDecl::new(advanced, ADVANCED_CONFIGURATION))
            .add_statement("this.$N = $N", args![ADVANCED_CONFIGURATION, ADVANCED_CONFIGURATION])
            .add_statement("return thisBuilder()", args![])
            .build()?;
        let getter = MethodDecl::builder(ADVANCED_CONFIGURATION)
            .add_modifiers([Modifier::Protected, Modifier::Final])
            .returns(advanced)
            .add_statement("return $N", args![ADVANCED_CONFIGURATION])
            .build()?;
        Ok(vec![setter, getter])
    }
}

impl ClassSpec for BaseClientBuilderClass<'_> {
    fn class_name(&self) -> ClassName { self.names.base_builder() }

    fn type_decl(&self) -> Result<TypeDecl> {
        let (builder, client) = builder_and_client();
        let bound = TypeName::parameterized(runtime::client_builder(), vec![builder.clone(), client.clone()]);

        let mut methods = vec![self.service_endpoint_prefix()?, self.service_defaults()?];
        if let Some(expression) = &self.model.customization().service_specific_http_config {
            methods.push(self.service_specific_http_config(expression)?);
        }

        let class_name = self.class_name();
        let mut decl = TypeDecl::class_builder(class_name.simple_name())
            .add_annotation(Annotation::new(runtime::sdk_internal_api()))
            .add_modifiers([Modifier::Abstract])
            .add_type_variable(TypeName::bounded_type_variable("B", bound.clone()))
            .add_type_variable(client.clone())
            .superclass(TypeName::parameterized(runtime::default_client_builder(), vec![builder, client]))
            .add_superinterface(bound);
        if let Some(advanced) = &self.advanced_configuration {
            decl = decl.add_field(
                FieldDecl::builder(advanced, ADVANCED_CONFIGURATION)
                    .add_modifiers([Modifier::Private])
                    .build(),
            );
            methods.extend(self.advanced_configuration_methods(advanced)?);
        }

        debug!(class = %class_name, methods = methods.len(), "assembled base builder");
        Ok(decl.add_methods(methods).build())
    }
}

#[cfg(test)]
mod tests {
    use model::{ProtocolKind, ServiceMetadata};

    use super::*;

    fn model(version: SignatureVersion) -> ServiceModel {
        let mut metadata = ServiceMetadata::new("Json", "software.amazon.awssdk.services.json", ProtocolKind::Json);
        metadata.endpoint_prefix = "json-service".to_string();
        metadata.signature_version = version;
        ServiceModel::builder().metadata(metadata).build().expect("model")
    }

    #[test]
    fn test_v4_signer_uses_signing_name() {
        let model = model(SignatureVersion::V4);
        let decl = BaseClientBuilderClass::new(&model).expect("builder").type_decl().expect("decl");
        let defaults = decl.method("serviceDefaults").expect("serviceDefaults").body().to_string();
        assert!(defaults.contains("signer.setServiceName(\"json-service\");"));
        assert!(defaults.contains("/software/amazon/awssdk/services/json/request.handlers"));
        assert!(!defaults.contains("QueryStringSigner"));
    }

    #[test]
    fn test_v2_signer_is_query_string() {
        let model = model(SignatureVersion::V2);
        let decl = BaseClientBuilderClass::new(&model).expect("builder").type_decl().expect("decl");
        let defaults = decl.method("serviceDefaults").expect("serviceDefaults").body().to_string();
        assert!(defaults.contains("return new StaticSignerProvider(new QueryStringSigner());"));
        assert!(decl.method("serviceSpecificHttpConfig").is_none());
        assert!(decl.field(ADVANCED_CONFIGURATION).is_none());
    }
}
