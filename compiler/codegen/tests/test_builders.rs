//! Builder classes and interfaces

use codegen::{
    AsyncClientBuilderClass, BaseClientBuilderClass, BuilderFlavour, ClassSpec,
    ClientBuilderInterface, SyncClientBuilderClass,
};
use decl::{ClassName, Modifier, TypeName};
use model::{CustomizationConfig, ProtocolKind, ServiceMetadata, ServiceModel};

const QUERY_MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../resources/models/query-service.json");

fn plain_model() -> ServiceModel {
    let mut metadata = ServiceMetadata::new("Pets", "com.example.pets", ProtocolKind::RestJson);
    metadata.signing_name = Some("petstore".to_string());
    ServiceModel::builder()
        .metadata(metadata)
        .customization(CustomizationConfig {
            service_specific_http_config: Some("PetsHttpConfig.DEFAULTS".to_string()),
            ..CustomizationConfig::default()
        })
        .build()
        .expect("model should build")
}

#[test]
fn test_base_builder_shape() {
    let model = plain_model();
    let base = BaseClientBuilderClass::new(&model).expect("base builder");
    assert_eq!(base.class_name(), ClassName::new("com.example.pets", "DefaultPetsBaseClientBuilder"));

    let decl = base.type_decl().expect("decl");
    assert!(decl.modifiers().contains(&Modifier::Abstract));
    assert_eq!(
        decl.superclass().and_then(TypeName::class_name),
        Some(&ClassName::new("software.amazon.awssdk.client.builder", "DefaultClientBuilder"))
    );

    let prefix = decl.method("serviceEndpointPrefix").expect("endpoint prefix");
    assert!(prefix.has_modifier(Modifier::Final));
    assert_eq!(prefix.body().to_string(), "return \"pets\";\n");

    let defaults = decl.method("serviceDefaults").expect("defaults").body().to_string();
    assert!(defaults.starts_with("return new ClientConfigurationDefaults() {\n"));
    assert!(defaults.contains("signer.setServiceName(\"petstore\");"));
    assert!(defaults.contains("builder.signerProvider(builder.signerProvider().orElseGet(this::defaultSignerProvider));"));
    assert!(defaults.contains("chainFactory.newRequestHandler2Chain(\"/com/example/pets/request.handler2s\")"));
    assert!(defaults.trim_end().ends_with("};"));

    let http = decl.method("serviceSpecificHttpConfig").expect("http config");
    assert_eq!(http.body().to_string(), "return PetsHttpConfig.DEFAULTS;\n");
}

#[test]
fn test_builders_without_advanced_configuration() {
    let model = plain_model();
    let sync = SyncClientBuilderClass::new(&model).expect("sync builder").type_decl().expect("decl");
    assert_eq!(
        sync.method("buildClient").expect("buildClient").body().to_string(),
        "return new DefaultPetsClient(super.syncClientConfiguration().asLegacySyncClientParams());\n"
    );
    assert!(sync.method("buildServiceClient").is_none());

    let async_builder =
        AsyncClientBuilderClass::new(&model).expect("async builder").type_decl().expect("decl");
    assert_eq!(
        async_builder.method("buildAsyncClient").expect("buildAsyncClient").body().to_string(),
        "return new DefaultPetsAsyncClient(super.asyncClientConfiguration().asLegacyAsyncClientParams());\n"
    );

    let interface =
        ClientBuilderInterface::new(&model, BuilderFlavour::Sync).expect("interface").type_decl().expect("decl");
    assert!(interface.methods().is_empty());
}

#[test]
fn test_builders_forward_advanced_configuration() {
    let model = ServiceModel::from_file(QUERY_MODEL).expect("model should load");

    let base = BaseClientBuilderClass::new(&model).expect("base builder").type_decl().expect("decl");
    assert!(base.field("advancedConfiguration").is_some());
    let defaults = base.method("serviceDefaults").expect("defaults").body().to_string();
    assert!(defaults.contains("return new StaticSignerProvider(new QueryStringSigner());"));
    assert!(base.method("serviceSpecificHttpConfig").is_none());

    let sync = SyncClientBuilderClass::new(&model).expect("sync builder").type_decl().expect("decl");
    assert_eq!(
        sync.method("buildClient").expect("buildClient").body().to_string(),
        "return buildServiceClient(super.syncClientConfiguration(), advancedConfiguration());\n"
    );
    let service_client = sync.method("buildServiceClient").expect("buildServiceClient");
    assert_eq!(service_client.parameters().len(), 2);
    assert!(service_client.body().to_string().contains(
        "return new DefaultQueryClient(syncClientConfiguration.asLegacySyncClientParams(), advancedConfiguration);"
    ));

    let async_builder =
        AsyncClientBuilderClass::new(&model).expect("async builder").type_decl().expect("decl");
    assert!(async_builder
        .method("buildAsyncClient")
        .expect("buildAsyncClient")
        .body()
        .to_string()
        .ends_with("asLegacyAsyncClientParams(), advancedConfiguration());\n"));

    let interface =
        ClientBuilderInterface::new(&model, BuilderFlavour::Sync).expect("interface").type_decl().expect("decl");
    let setter = interface.method("advancedConfiguration").expect("setter");
    assert_eq!(
        setter.return_type(),
        &TypeName::from(ClassName::new("software.amazon.awssdk.services.query", "QueryClientBuilder"))
    );
}
