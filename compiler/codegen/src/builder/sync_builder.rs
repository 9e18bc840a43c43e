//! The sync builder, `DefaultSClientBuilder`.

use decl::{args, Annotation, ClassName, MethodDecl, Modifier, ParameterDecl, TypeDecl, TypeName};
use model::ServiceModel;
use tracing::debug;

use super::ADVANCED_CONFIGURATION;
use crate::naming::ClientNames;
use crate::{runtime, ClassSpec, Result};

/// Assembles the sync builder.
pub struct SyncClientBuilderClass {
    names: ClientNames,
    advanced_configuration: Option<ClassName>,
}

impl SyncClientBuilderClass {
    /// Prepare the assembler.
    pub fn new(model: &ServiceModel) -> Result<Self> {
        let names = ClientNames::new(model)?;
        let advanced_configuration = names.advanced_configuration(model)?;
        Ok(Self { names, advanced_configuration })
    }

    fn build_client(&self) -> Result<MethodDecl> {
        let method = MethodDecl::builder("buildClient")
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Protected, Modifier::Final])
            .returns(self.names.sync_interface());
        let method = match self.advanced_configuration {
            Some(_) => method.add_statement(
                "return buildServiceClient(super.syncClientConfiguration(), $N())",
                args![ADVANCED_CONFIGURATION],
            ),
            None => method.add_statement(
                "return new $T(super.syncClientConfiguration().asLegacySyncClientParams())",
                args![self.names.sync_client()],
            ),
        };
        Ok(method.build()?)
    }

    fn build_service_client(&self, advanced: &ClassName) -> Result<MethodDecl> {
        let sync_configuration = runtime::immutable_sync_client_configuration();
        Ok(MethodDecl::builder("buildServiceClient")
            .add_modifiers([Modifier::Protected, Modifier::Final])
            .returns(self.names.sync_interface())
            .add_parameter(ParameterDecl::new(runtime::immutable_client_configuration(), "clientConfiguration"))
            .add_parameter(ParameterDecl::new(advanced, ADVANCED_CONFIGURATION))
            .add_statement(
                "$T syncClientConfiguration = ($T) clientConfiguration",
                args![&sync_configuration, &sync_configuration],
            )
            .add_statement(
                "return new $T(syncClientConfiguration.asLegacySyncClientParams(), $N)",
                args![self.names.sync_client(), ADVANCED_CONFIGURATION],
            )
            .build()?)
    }
}

impl ClassSpec for SyncClientBuilderClass {
    fn class_name(&self) -> ClassName { self.names.sync_builder() }

    fn type_decl(&self) -> Result<TypeDecl> {
        let mut methods = vec![self.build_client()?];
        if let Some(advanced) = &self.advanced_configuration {
            methods.push(self.build_service_client(advanced)?);
        }

        let class_name = self.class_name();
        debug!(class = %class_name, methods = methods.len(), "assembled sync builder");
        Ok(TypeDecl::class_builder(class_name.simple_name())
            .add_annotation(Annotation::new(runtime::sdk_internal_api()))
            .add_modifiers([Modifier::Final])
            .superclass(TypeName::parameterized(
                self.names.base_builder(),
                vec![self.names.sync_builder_interface().into(), self.names.sync_interface().into()],
            ))
            .add_superinterface(self.names.sync_builder_interface())
            .add_methods(methods)
            .build())
    }
}
