//! The async client interface, `SAsyncClient`.

use decl::{args, Annotation, ClassName, MethodDecl, Modifier, ParameterDecl, TypeDecl, TypeName};
use model::{OperationModel, ServiceModel};
use tracing::debug;

use super::operation_javadoc;
use crate::naming::ClientNames;
use crate::{runtime, ClassSpec, Result};

/// Assembles the async interface. Operations return futures and, like the
/// sync interface, throw until overridden.
pub struct AsyncClientInterface<'a> {
    model: &'a ServiceModel,
    names: ClientNames,
}

impl<'a> AsyncClientInterface<'a> {
    /// Prepare the assembler.
    pub fn new(model: &'a ServiceModel) -> Result<Self> {
        Ok(Self { model, names: ClientNames::new(model)? })
    }

    fn operation(&self, operation: &OperationModel) -> Result<MethodDecl> {
        let types = self.names.operation(operation)?;
        let returns = format!(
            "A future completing with the result of the {} operation returned by the service.",
            operation.name
        );
        let future =
            TypeName::parameterized(runtime::completable_future(), vec![(&types.response).into()]);
        let mut method = MethodDecl::builder(&types.method_name)
            .javadoc(operation_javadoc(operation, &types, &returns))
            .add_modifiers([Modifier::Default])
            .returns(future)
            .add_parameter(ParameterDecl::new(&types.request, &types.input_name))
            .add_statement("throw new $T()", args![runtime::unsupported_operation_exception()]);
        if operation.deprecated {
            method = method.add_annotation(Annotation::deprecated());
        }
        Ok(method.build()?)
    }
}

impl ClassSpec for AsyncClientInterface<'_> {
    fn class_name(&self) -> ClassName { self.names.async_interface() }

    fn type_decl(&self) -> Result<TypeDecl> {
        let interface = self.names.async_interface();
        let mut methods = vec![
            MethodDecl::builder("builder")
                .add_modifiers([Modifier::Static])
                .returns(self.names.async_builder_interface())
                .add_statement("return new $T()", args![self.names.async_builder()])
                .build()?,
            MethodDecl::builder("create")
                .add_modifiers([Modifier::Static])
                .returns(&interface)
                .add_statement("return builder().build()", args![])
                .build()?,
        ];
        for operation in self.model.operations().values() {
            methods.push(self.operation(operation)?);
        }

        debug!(class = %interface, methods = methods.len(), "assembled async interface");
        Ok(TypeDecl::interface_builder(interface.simple_name())
            .javadoc(format!(
                "Service client for accessing {} asynchronously.",
                self.names.service()
            ))
            .add_modifiers([Modifier::Public])
            .add_superinterface(runtime::auto_closeable())
            .add_methods(methods)
            .build())
    }
}
