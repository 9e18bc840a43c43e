//! The sync client interface, `SClient`.

use decl::{args, Annotation, ClassName, MethodDecl, Modifier, ParameterDecl, TypeDecl};
use model::{OperationModel, ServiceModel};
use tracing::debug;

use super::operation_javadoc;
use crate::naming::ClientNames;
use crate::{runtime, ClassSpec, Result};

/// Assembles the sync interface: default-throwing operations, static
/// factories and the optional accessors the client implements.
pub struct SyncClientInterface<'a> {
    model: &'a ServiceModel,
    names: ClientNames,
}

impl<'a> SyncClientInterface<'a> {
    /// Prepare the assembler.
    pub fn new(model: &'a ServiceModel) -> Result<Self> {
        Ok(Self { model, names: ClientNames::new(model)? })
    }

    fn builder(&self) -> Result<MethodDecl> {
        Ok(MethodDecl::builder("builder")
            .javadoc(format!(
                "Create a builder that can be used to configure and create a {{@link {}}}.",
                self.names.sync_interface().simple_name()
            ))
            .add_modifiers([Modifier::Static])
            .returns(self.names.sync_builder_interface())
            .add_statement("return new $T()", args![self.names.sync_builder()])
            .build()?)
    }

    fn create(&self) -> Result<MethodDecl> {
        Ok(MethodDecl::builder("create")
            .javadoc(format!(
                "Create a {{@link {}}} with the region loaded from the default provider chain.",
                self.names.sync_interface().simple_name()
            ))
            .add_modifiers([Modifier::Static])
            .returns(self.names.sync_interface())
            .add_statement("return builder().build()", args![])
            .build()?)
    }

    fn operation(&self, operation: &OperationModel) -> Result<MethodDecl> {
        let types = self.names.operation(operation)?;
        let returns = format!("Result of the {} operation returned by the service.", operation.name);
        let mut method = MethodDecl::builder(&types.method_name)
            .javadoc(operation_javadoc(operation, &types, &returns))
            .add_modifiers([Modifier::Default])
            .returns(&types.response)
            .add_parameter(ParameterDecl::new(&types.request, &types.input_name))
            .add_statement("throw new $T()", args![runtime::unsupported_operation_exception()]);
        if operation.deprecated {
            method = method.add_annotation(Annotation::deprecated());
        }
        Ok(method.build()?)
    }

    fn service_metadata(&self) -> Result<MethodDecl> {
        Ok(MethodDecl::builder("serviceMetadata")
            .add_modifiers([Modifier::Static])
            .returns(runtime::service_metadata())
            .add_statement(
                "return $T.of($S)",
                args![runtime::service_metadata(), &self.model.metadata().endpoint_prefix],
            )
            .build()?)
    }
}

/// An abstract accessor the concrete client overrides.
fn accessor(name: &str, returns: &ClassName) -> Result<MethodDecl> {
    Ok(MethodDecl::builder(name).returns(returns).build()?)
}

impl ClassSpec for SyncClientInterface<'_> {
    fn class_name(&self) -> ClassName { self.names.sync_interface() }

    fn type_decl(&self) -> Result<TypeDecl> {
        let mut methods = vec![self.builder()?, self.create()?];
        for operation in self.model.operations().values() {
            methods.push(self.operation(operation)?);
        }
        methods.push(self.service_metadata()?);
        if self.model.has_waiters() {
            methods.push(accessor("waiters", &self.names.waiters())?);
        }
        if let Some(presigners) = self.names.presigners(self.model)? {
            methods.push(accessor("presigners", &presigners)?);
        }

        let class_name = self.class_name();
        debug!(class = %class_name, methods = methods.len(), "assembled sync interface");
        Ok(TypeDecl::interface_builder(class_name.simple_name())
            .javadoc(format!("Service client for accessing {}.", self.names.service()))
            .add_modifiers([Modifier::Public])
            .add_superinterface(runtime::auto_closeable())
            .add_methods(methods)
            .build())
    }
}
