//! End-to-end generation from the bundled models

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, EmitterConfig};
use model::{ProtocolKind, ServiceModel};
use pipeline::{generate_service, plan, run, GenerationContext, PipelineError};

const JSON_MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../resources/models/json-service.json");
const QUERY_MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../resources/models/query-service.json");

fn load(path: &str) -> ServiceModel { ServiceModel::from_file(path).expect("model should load") }

#[test]
fn test_generates_client_family_in_fixed_order() {
    let files = generate_service(&load(JSON_MODEL)).expect("generation should succeed");
    let names: Vec<String> = files
        .iter()
        .map(|f| f.path.file_name().expect("file name").to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "JsonClient.java",
            "DefaultJsonClient.java",
            "JsonAsyncClient.java",
            "DefaultJsonAsyncClient.java",
            "DefaultJsonBaseClientBuilder.java",
            "JsonClientBuilder.java",
            "DefaultJsonClientBuilder.java",
            "JsonAsyncClientBuilder.java",
            "DefaultJsonAsyncClientBuilder.java",
        ]
    );
    for file in &files {
        assert!(file.path.starts_with("software/amazon/awssdk/services/json"));
        assert!(file.source.starts_with("package software.amazon.awssdk.services.json;\n"));
        assert!(file.source.contains("@Generated(\"software.amazon.awssdk:codegen\")"));
    }
}

#[test]
fn test_generation_is_byte_identical() {
    let model = load(QUERY_MODEL);
    let first = generate_service(&model).expect("first run");
    let second = generate_service(&model).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn test_sync_client_imports_runtime_types() {
    let files = generate_service(&load(JSON_MODEL)).expect("generation should succeed");
    let client = files
        .iter()
        .find(|f| f.path.ends_with("DefaultJsonClient.java"))
        .expect("sync client");
    assert!(client.source.contains("import software.amazon.awssdk.protocol.json.SdkJsonProtocolFactory;"));
    assert!(client.source.contains("class DefaultJsonClient implements JsonClient {"));
    assert!(client.source.contains("private volatile JsonClientWaiters waiters;"));
}

#[test]
fn test_plan_lists_types_without_rendering() {
    let plan = plan(&load(QUERY_MODEL)).expect("plan");
    assert_eq!(plan.service, "Query");
    assert_eq!(plan.protocol, ProtocolKind::Query);
    assert_eq!(plan.strategy, "query-xml");
    assert_eq!(plan.types.len(), 9);
    assert_eq!(plan.types[1].canonical_name(), "software.amazon.awssdk.services.query.DefaultQueryClient");
}

#[test]
fn test_context_applies_emitter_settings() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let emitter = EmitterConfig {
        generated_annotation: false,
        file_comment: Some("Copyright Example Corp.".to_string()),
        ..EmitterConfig::default()
    };
    let ctx = GenerationContext::builder()
        .model(load(JSON_MODEL))
        .output_dir(dir.path())
        .emitter(emitter)
        .build()
        .expect("context");

    let written = ctx.generate_and_write().expect("write");
    assert_eq!(written.len(), 9);
    let source = fs::read_to_string(&written[0]).expect("read back");
    assert!(source.starts_with("/*\n * Copyright Example Corp.\n */\n"));
    assert!(!source.contains("@Generated"));
    assert!(source.ends_with("}\n"));
    assert!(source.lines().all(|line| line == line.trim_end()));
}

#[test]
fn test_run_writes_to_configured_output() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let mut config = Config::default();
    config.codegen.model_path = Some(PathBuf::from(QUERY_MODEL));
    config.codegen.output_dir = dir.path().to_path_buf();

    let written = run(&config).expect("run should succeed");
    let expected: &Path = &dir.path().join("software/amazon/awssdk/services/query/DefaultQueryClient.java");
    assert!(written.iter().any(|p| p == expected));
    assert!(expected.exists());
}

#[test]
fn test_run_requires_model_path() {
    let err = run(&Config::default()).expect_err("no model configured");
    assert!(matches!(err, PipelineError::Missing("codegen.model_path")));
}
