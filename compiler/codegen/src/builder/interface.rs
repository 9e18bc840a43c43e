//! The public builder interfaces, `SClientBuilder` and `SAsyncClientBuilder`.

use decl::{ClassName, MethodDecl, Modifier, ParameterDecl, TypeDecl, TypeName};
use model::ServiceModel;
use tracing::debug;

use super::ADVANCED_CONFIGURATION;
use crate::naming::ClientNames;
use crate::{runtime, ClassSpec, Result};

/// Which client a builder interface creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderFlavour {
    /// Builds `SClient`.
    Sync,
    /// Builds `SAsyncClient`.
    Async,
}

/// Assembles one builder interface.
pub struct ClientBuilderInterface {
    flavour: BuilderFlavour,
    names: ClientNames,
    advanced_configuration: Option<ClassName>,
}

impl ClientBuilderInterface {
    /// Prepare the assembler for `flavour`.
    pub fn new(model: &ServiceModel, flavour: BuilderFlavour) -> Result<Self> {
        let names = ClientNames::new(model)?;
        let advanced_configuration = names.advanced_configuration(model)?;
        Ok(Self { flavour, names, advanced_configuration })
    }

    fn client(&self) -> ClassName {
        match self.flavour {
            BuilderFlavour::Sync => self.names.sync_interface(),
            BuilderFlavour::Async => self.names.async_interface(),
        }
    }
}

impl ClassSpec for ClientBuilderInterface {
    fn class_name(&self) -> ClassName {
        match self.flavour {
            BuilderFlavour::Sync => self.names.sync_builder_interface(),
            BuilderFlavour::Async => self.names.async_builder_interface(),
        }
    }

    fn type_decl(&self) -> Result<TypeDecl> {
        let class_name = self.class_name();
        let client = self.client();
        let mut decl = TypeDecl::interface_builder(class_name.simple_name())
            .javadoc(format!(
                "A builder for creating an instance of {{@link {}}}. This can be created with the static \
                 {{@link {}#builder()}} method.",
                client.simple_name(),
                client.simple_name()
            ))
            .add_modifiers([Modifier::Public])
            .add_superinterface(TypeName::parameterized(
                runtime::client_builder(),
                vec![(&class_name).into(), client.into()],
            ));
        if let Some(advanced) = &self.advanced_configuration {
            decl = decl.add_method(
                MethodDecl::builder(ADVANCED_CONFIGURATION)
                    .javadoc("Configure service-specific behaviour of the client.")
                    .returns(&class_name)
                    .add_parameter(ParameterDecl::new(advanced, ADVANCED_CONFIGURATION))
                    .build()?,
            );
        }

        debug!(class = %class_name, flavour = ?self.flavour, "assembled builder interface");
        Ok(decl.build())
    }
}

#[cfg(test)]
mod tests {
    use model::{CustomizationConfig, ProtocolKind, ServiceMetadata};

    use super::*;

    #[test]
    fn test_advanced_configuration_setter_is_declared() {
        let model = ServiceModel::builder()
            .metadata(ServiceMetadata::new("Json", "p", ProtocolKind::Json))
            .customization(CustomizationConfig {
                service_specific_client_config_class: Some("AdvancedConfiguration".to_string()),
                ..CustomizationConfig::default()
            })
            .build()
            .expect("model");
        let spec = ClientBuilderInterface::new(&model, BuilderFlavour::Async).expect("spec");
        assert_eq!(spec.class_name().simple_name(), "JsonAsyncClientBuilder");
        let decl = spec.type_decl().expect("decl");
        let setter = decl.method(ADVANCED_CONFIGURATION).expect("setter");
        assert_eq!(setter.parameters()[0].type_name(), &TypeName::from(ClassName::new("p", "AdvancedConfiguration")));
        assert!(setter.body().is_empty());
    }
}
