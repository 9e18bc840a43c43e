//! The concrete async client, `DefaultSAsyncClient`.

use decl::{
    args, Annotation, ClassName, FieldDecl, MethodDecl, Modifier, ParameterDecl, TypeDecl, TypeName,
};
use model::{OperationModel, ServiceModel};
use tracing::debug;

use super::{ADVANCED_CONFIGURATION, CLIENT_PARAMS};
use crate::naming::ClientNames;
use crate::{runtime, ClassSpec, Result};

const SYNC_CLIENT: &str = "syncClient";
const EXECUTOR: &str = "executor";

/// Assembles the async client: every operation runs the sync client's
/// operation on the executor supplied with the client parameters.
pub struct AsyncClientClass<'a> {
    model: &'a ServiceModel,
    names: ClientNames,
    advanced_configuration: Option<ClassName>,
}

impl<'a> AsyncClientClass<'a> {
    /// Prepare the assembler.
    pub fn new(model: &'a ServiceModel) -> Result<Self> {
        let names = ClientNames::new(model)?;
        let advanced_configuration = names.advanced_configuration(model)?;
        Ok(Self { model, names, advanced_configuration })
    }

    fn constructors(&self) -> Result<Vec<MethodDecl>> {
        let params = ParameterDecl::new(runtime::aws_async_client_params(), CLIENT_PARAMS);
        let basic = MethodDecl::constructor()
            .add_modifiers([Modifier::Protected])
            .add_parameter(params.clone());

        let Some(advanced) = &self.advanced_configuration else {
            let basic = basic
                .add_statement(
                    "this.$N = new $T($N)",
                    args![SYNC_CLIENT, self.names.sync_client(), CLIENT_PARAMS],
                )
                .add_statement("this.$N = $N.getExecutor()", args![EXECUTOR, CLIENT_PARAMS])
                .build()?;
            return Ok(vec![basic]);
        };

        let delegating = basic.add_statement("this($N, null)", args![CLIENT_PARAMS]).build()?;
        let full = MethodDecl::constructor()
            .add_modifiers([Modifier::Protected])
            .add_parameter(params)
            .add_parameter(ParameterDecl::new(advanced, ADVANCED_CONFIGURATION))
            .add_statement(
                "this.$N = new $T($N, $N)",
                args![SYNC_CLIENT, self.names.sync_client(), CLIENT_PARAMS, ADVANCED_CONFIGURATION],
            )
            .add_statement("this.$N = $N.getExecutor()", args![EXECUTOR, CLIENT_PARAMS])
            .build()?;
        Ok(vec![delegating, full])
    }

    fn operation(&self, operation: &OperationModel) -> Result<MethodDecl> {
        let types = self.names.operation(operation)?;
        let future =
            TypeName::parameterized(runtime::completable_future(), vec![(&types.response).into()]);
        Ok(MethodDecl::builder(&types.method_name)
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Public])
            .returns(future)
            .add_parameter(ParameterDecl::new(&types.request, &types.input_name))
            .add_statement(
                "return $T.supplyAsync(() -> $N.$N($N), $N)",
                args![
                    runtime::completable_future(),
                    SYNC_CLIENT,
                    &types.method_name,
                    &types.input_name,
                    EXECUTOR
                ],
            )
            .build()?)
    }

    fn close(&self) -> Result<MethodDecl> {
        Ok(MethodDecl::builder("close")
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Public])
            .add_exception(runtime::exception())
            .add_statement("$N.close()", args![SYNC_CLIENT])
            .build()?)
    }
}

impl ClassSpec for AsyncClientClass<'_> {
    fn class_name(&self) -> ClassName { self.names.async_client() }

    fn type_decl(&self) -> Result<TypeDecl> {
        let private_final = [Modifier::Private, Modifier::Final];
        let mut methods = self.constructors()?;
        for operation in self.model.operations().values() {
            methods.push(self.operation(operation)?);
        }
        methods.push(self.close()?);

        let class_name = self.class_name();
        debug!(class = %class_name, methods = methods.len(), "assembled async client");
        Ok(TypeDecl::class_builder(class_name.simple_name())
            .add_superinterface(self.names.async_interface())
            .add_field(
                FieldDecl::builder(self.names.sync_interface(), SYNC_CLIENT)
                    .add_modifiers(private_final)
                    .build(),
            )
            .add_field(
                FieldDecl::builder(runtime::executor_service(), EXECUTOR)
                    .add_modifiers(private_final)
                    .build(),
            )
            .add_methods(methods)
            .build())
    }
}
