//! The async builder, `DefaultSAsyncClientBuilder`.

use decl::{args, Annotation, ClassName, MethodDecl, Modifier, TypeDecl, TypeName};
use model::ServiceModel;
use tracing::debug;

use super::ADVANCED_CONFIGURATION;
use crate::naming::ClientNames;
use crate::{runtime, ClassSpec, Result};

/// Assembles the async builder. The advanced configuration, when declared,
/// is passed straight to the async client.
pub struct AsyncClientBuilderClass {
    names: ClientNames,
    advanced: bool,
}

impl AsyncClientBuilderClass {
    /// Prepare the assembler.
    pub fn new(model: &ServiceModel) -> Result<Self> {
        let names = ClientNames::new(model)?;
        let advanced = names.advanced_configuration(model)?.is_some();
        Ok(Self { names, advanced })
    }

    fn build_async_client(&self) -> Result<MethodDecl> {
        let method = MethodDecl::builder("buildAsyncClient")
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Protected, Modifier::Final])
            .returns(self.names.async_interface());
        let method = if self.advanced {
            method.add_statement(
                "return new $T(super.asyncClientConfiguration().asLegacyAsyncClientParams(), $N())",
                args![self.names.async_client(), ADVANCED_CONFIGURATION],
            )
        } else {
            method.add_statement(
                "return new $T(super.asyncClientConfiguration().asLegacyAsyncClientParams())",
                args![self.names.async_client()],
            )
        };
        Ok(method.build()?)
    }
}

impl ClassSpec for AsyncClientBuilderClass {
    fn class_name(&self) -> ClassName { self.names.async_builder() }

    fn type_decl(&self) -> Result<TypeDecl> {
        let class_name = self.class_name();
        debug!(class = %class_name, "assembled async builder");
        Ok(TypeDecl::class_builder(class_name.simple_name())
            .add_annotation(Annotation::new(runtime::sdk_internal_api()))
            .add_modifiers([Modifier::Final])
            .superclass(TypeName::parameterized(
                self.names.base_builder(),
                vec![self.names.async_builder_interface().into(), self.names.async_interface().into()],
            ))
            .add_superinterface(self.names.async_builder_interface())
            .add_method(self.build_async_client()?)
            .build())
    }
}
