//! The concrete sync client, `DefaultSClient`.

use decl::{
    args, Annotation, ClassName, FieldDecl, MethodDecl, MethodDeclBuilder, Modifier, ParameterDecl,
    TypeDecl,
};
use model::{OperationModel, ServiceModel};
use tracing::debug;

use super::{ADVANCED_CONFIGURATION, CLIENT_PARAMS};
use crate::naming::ClientNames;
use crate::protocol::{ProtocolSpec, CLIENT_HANDLER, INIT_METHOD};
use crate::{runtime, ClassSpec, Result};

const WAITERS: &str = "waiters";
const PRESIGNERS: &str = "presigners";

/// Assembles the sync client class from a model and its protocol strategy.
pub struct SyncClientClass<'a> {
    model: &'a ServiceModel,
    protocol: &'a dyn ProtocolSpec,
    names: ClientNames,
    advanced_configuration: Option<ClassName>,
    presigners: Option<ClassName>,
}

impl<'a> SyncClientClass<'a> {
    /// Prepare the assembler; configured class names are resolved here.
    pub fn new(model: &'a ServiceModel, protocol: &'a dyn ProtocolSpec) -> Result<Self> {
        let names = ClientNames::new(model)?;
        let advanced_configuration = names.advanced_configuration(model)?;
        let presigners = names.presigners(model)?;
        Ok(Self { model, protocol, names, advanced_configuration, presigners })
    }

    fn fields(&self) -> Vec<FieldDecl> {
        let private_final = [Modifier::Private, Modifier::Final];
        let mut fields = vec![
            FieldDecl::builder(runtime::client_handler(), CLIENT_HANDLER)
                .add_modifiers(private_final)
                .build(),
            self.protocol.protocol_factory_field(),
            FieldDecl::builder(runtime::aws_sync_client_params(), CLIENT_PARAMS)
                .add_modifiers(private_final)
                .build(),
        ];
        if let Some(advanced) = &self.advanced_configuration {
            fields.push(
                FieldDecl::builder(advanced, ADVANCED_CONFIGURATION)
                    .add_modifiers(private_final)
                    .build(),
            );
        }
        if self.model.has_waiters() {
            fields.push(
                FieldDecl::builder(self.names.waiters(), WAITERS)
                    .add_modifiers([Modifier::Private, Modifier::Volatile])
                    .build(),
            );
        }
        fields
    }

    /// One constructor, or two when an advanced configuration is declared:
    /// the basic one then delegates with a null configuration.
    fn constructors(&self) -> Result<Vec<MethodDecl>> {
        let params = ParameterDecl::new(runtime::aws_sync_client_params(), CLIENT_PARAMS);
        let basic = MethodDecl::constructor()
            .add_modifiers([Modifier::Protected])
            .add_parameter(params.clone());

        let Some(advanced) = &self.advanced_configuration else {
            return Ok(vec![self.initialize(basic, false)?]);
        };

        let delegating = basic.add_statement("this($N, null)", args![CLIENT_PARAMS]).build()?;
        let full = MethodDecl::constructor()
            .add_modifiers([Modifier::Protected])
            .add_parameter(params)
            .add_parameter(ParameterDecl::new(advanced, ADVANCED_CONFIGURATION));
        Ok(vec![delegating, self.initialize(full, true)?])
    }

    /// Constructor body: handler, stored parameters, protocol initializer.
    fn initialize(&self, constructor: MethodDeclBuilder, advanced: bool) -> Result<MethodDecl> {
        let mut constructor = constructor.add_code_fmt(
            "this.$N = new $T(new $T().withClientParams($N)\n$>$>",
            args![
                CLIENT_HANDLER,
                self.protocol.client_handler_type(),
                runtime::client_handler_params(),
                CLIENT_PARAMS
            ],
        );
        if advanced {
            constructor = constructor
                .add_code_fmt(".withServiceAdvancedConfiguration($N)\n", args![ADVANCED_CONFIGURATION]);
        }
        constructor = constructor
            .add_code_fmt(
                ".withCalculateCrc32FromCompressedDataEnabled($L));\n$<$<",
                args![self.model.customization().calculate_crc32_from_compressed_data],
            )
            .add_statement("this.$N = $N", args![CLIENT_PARAMS, CLIENT_PARAMS]);
        if advanced {
            constructor = constructor
                .add_statement("this.$N = $N", args![ADVANCED_CONFIGURATION, ADVANCED_CONFIGURATION]);
        }
        let protocol_field = self.protocol.protocol_factory_field();
        Ok(constructor.add_statement("this.$N = $N()", args![&protocol_field, INIT_METHOD]).build()?)
    }

    /// `@Override public R op(Req req)`: response handler, error handler, execution.
    fn operation(&self, operation: &OperationModel) -> Result<MethodDecl> {
        let types = self.names.operation(operation)?;
        Ok(MethodDecl::builder(&types.method_name)
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Public])
            .returns(&types.response)
            .add_parameter(ParameterDecl::new(&types.request, &types.input_name))
            .add_code(self.protocol.response_handler(operation)?)
            .add_code_fmt("\n", args![])
            .add_code(self.protocol.error_response_handler(operation)?)
            .add_code_fmt("\n", args![])
            .add_code(self.protocol.execution_call(operation)?)
            .build()?)
    }

    /// Lazily builds the waiters once, with a double-checked lock on `this`.
    fn waiters(&self) -> Result<MethodDecl> {
        let waiters = self.names.waiters();
        Ok(MethodDecl::builder(WAITERS)
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Public])
            .returns(&waiters)
            .begin_control_flow("if ($N == null)", args![WAITERS])
            .begin_control_flow("synchronized (this)", args![])
            .begin_control_flow("if ($N == null)", args![WAITERS])
            .add_statement("$N = new $T(this)", args![WAITERS, &waiters])
            .end_control_flow()
            .end_control_flow()
            .end_control_flow()
            .add_statement("return $N", args![WAITERS])
            .build()?)
    }

    /// Builds a new presigner on every call.
    fn presigners(&self, presigners: &ClassName) -> Result<MethodDecl> {
        Ok(MethodDecl::builder(PRESIGNERS)
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Public])
            .returns(presigners)
            .add_code_fmt("return new $T($T.builder()\n$>$>", args![presigners, runtime::presigner_params()])
            .add_code_fmt(".endpoint($N.getEndpoint())\n", args![CLIENT_PARAMS])
            .add_code_fmt(".credentialsProvider($N.getCredentialsProvider())\n", args![CLIENT_PARAMS])
            .add_code_fmt(".signerProvider($N.getSignerProvider())\n", args![CLIENT_PARAMS])
            .add_code_fmt(".build());\n$<$<", args![])
            .build()?)
    }

    fn close(&self) -> Result<MethodDecl> {
        Ok(MethodDecl::builder("close")
            .add_annotation(Annotation::override_())
            .add_modifiers([Modifier::Public])
            .add_exception(runtime::exception())
            .add_statement("$N.close()", args![CLIENT_HANDLER])
            .build()?)
    }
}

impl ClassSpec for SyncClientClass<'_> {
    fn class_name(&self) -> ClassName { self.names.sync_client() }

    fn type_decl(&self) -> Result<TypeDecl> {
        let mut methods = self.constructors()?;
        for operation in self.model.operations().values() {
            methods.push(self.operation(operation)?);
        }
        if let Some(helper) = self.protocol.error_response_handler_method()? {
            methods.push(helper);
        }
        methods.push(self.protocol.protocol_factory_init()?);
        if self.model.has_waiters() {
            methods.push(self.waiters()?);
        }
        if let Some(presigners) = &self.presigners {
            methods.push(self.presigners(presigners)?);
        }
        methods.push(self.close()?);
        methods.extend(self.protocol.additional_methods()?);

        let class_name = self.class_name();
        debug!(
            class = %class_name,
            protocol = self.protocol.name(),
            methods = methods.len(),
            "assembled sync client"
        );

        let mut builder = TypeDecl::class_builder(class_name.simple_name())
            .add_superinterface(self.names.sync_interface());
        for field in self.fields() {
            builder = builder.add_field(field);
        }
        Ok(builder.add_methods(methods).build())
    }
}
