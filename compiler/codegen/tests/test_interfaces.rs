//! Client interfaces and the async client

use codegen::{AsyncClientClass, AsyncClientInterface, ClassSpec, SyncClientInterface};
use decl::{ClassName, Modifier, TypeDecl, TypeName};
use model::ServiceModel;

const JSON_MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../resources/models/json-service.json");
const QUERY_MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../resources/models/query-service.json");

fn load(path: &str) -> ServiceModel { ServiceModel::from_file(path).expect("model should load") }

fn body(decl: &TypeDecl, method: &str) -> String {
    decl.method(method).expect("method should exist").body().to_string()
}

fn response(package: &str, simple: &str) -> TypeName {
    TypeName::from(ClassName::new(format!("{package}.model"), simple))
}

#[test]
fn test_async_operations_run_on_the_supplied_executor() {
    let model = load(JSON_MODEL);
    let decl = AsyncClientClass::new(&model).expect("client").type_decl().expect("decl");

    assert_eq!(
        body(&decl, "aPostOperation"),
        "return CompletableFuture.supplyAsync(() -> syncClient.aPostOperation(aPostOperationRequest), executor);\n"
    );
    let constructors: Vec<_> = decl.constructors().collect();
    assert_eq!(constructors.len(), 1);
    assert_eq!(
        constructors[0].body().to_string(),
        "this.syncClient = new DefaultJsonClient(clientParams);\nthis.executor = clientParams.getExecutor();\n"
    );
    assert!(decl.field("executor").expect("executor field").has_modifier(Modifier::Final));
}

#[test]
fn test_async_close_closes_the_sync_client() {
    let model = load(JSON_MODEL);
    let decl = AsyncClientClass::new(&model).expect("client").type_decl().expect("decl");
    assert_eq!(body(&decl, "close"), "syncClient.close();\n");
}

#[test]
fn test_async_client_forwards_advanced_configuration() {
    let model = load(QUERY_MODEL);
    let decl = AsyncClientClass::new(&model).expect("client").type_decl().expect("decl");

    let constructors: Vec<_> = decl.constructors().collect();
    assert_eq!(constructors.len(), 2);
    assert_eq!(constructors[0].body().to_string(), "this(clientParams, null);\n");
    assert_eq!(constructors[1].parameters().len(), 2);
    assert!(constructors[1]
        .body()
        .to_string()
        .starts_with("this.syncClient = new DefaultQueryClient(clientParams, advancedConfiguration);\n"));
}

#[test]
fn test_interface_operations_default_to_unsupported() {
    let model = load(JSON_MODEL);
    let package = &model.metadata().client_package_name;

    let sync = SyncClientInterface::new(&model).expect("interface").type_decl().expect("decl");
    let operation = sync.method("aPostOperation").expect("operation");
    assert!(operation.has_modifier(Modifier::Default));
    assert_eq!(operation.return_type(), &response(package, "APostOperationResponse"));
    assert_eq!(operation.body().to_string(), "throw new UnsupportedOperationException();\n");

    let future = ClassName::new("java.util.concurrent", "CompletableFuture");
    let async_decl = AsyncClientInterface::new(&model).expect("interface").type_decl().expect("decl");
    let operation = async_decl.method("aPostOperation").expect("operation");
    assert!(operation.has_modifier(Modifier::Default));
    assert_eq!(
        operation.return_type(),
        &TypeName::parameterized(future, vec![response(package, "APostOperationResponse")])
    );
    assert_eq!(operation.body().to_string(), "throw new UnsupportedOperationException();\n");
}

#[test]
fn test_interface_factories_and_metadata() {
    let model = load(JSON_MODEL);
    let sync = SyncClientInterface::new(&model).expect("interface").type_decl().expect("decl");

    assert_eq!(body(&sync, "serviceMetadata"), "return ServiceMetadata.of(\"json-service\");\n");
    assert_eq!(body(&sync, "create"), "return builder().build();\n");
    assert_eq!(body(&sync, "builder"), "return new DefaultJsonClientBuilder();\n");
    assert!(sync.method("create").expect("create").has_modifier(Modifier::Static));
    assert!(sync.method("waiters").is_some());
    assert!(sync.method("presigners").is_some());

    let async_decl = AsyncClientInterface::new(&model).expect("interface").type_decl().expect("decl");
    assert_eq!(body(&async_decl, "create"), "return builder().build();\n");
    assert_eq!(body(&async_decl, "builder"), "return new DefaultJsonAsyncClientBuilder();\n");
}
