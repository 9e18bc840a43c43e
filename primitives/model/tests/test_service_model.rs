//! Loading and querying service models

use std::io::Write;

use model::*;
use tempfile::NamedTempFile;

fn json_model() -> ServiceModel {
    ServiceModel::builder()
        .metadata(ServiceMetadata::new(
            "Json",
            "software.amazon.awssdk.services.json",
            ProtocolKind::Json,
        ))
        .operation(OperationModel::new("APostOperation"))
        .operation(OperationModel::new("GetItem"))
        .shape(ShapeModel::new("APostOperationRequest", ShapeType::Request))
        .shape(ShapeModel::exception("InvalidInputException", "InvalidInput"))
        .shape(ShapeModel::new("APostOperationResponse", ShapeType::Response).with_streaming_member())
        .shape(ShapeModel::exception("ThrottledException", "Throttled"))
        .build()
        .expect("model should build")
}

#[test]
fn test_exceptions_in_declaration_order() {
    let model = json_model();
    let names: Vec<&str> = model.exceptions().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["InvalidInputException", "ThrottledException"]);
}

#[test]
fn test_operations_keep_insertion_order() {
    let model = json_model();
    let names: Vec<&String> = model.operations().keys().collect();
    assert_eq!(names, vec!["APostOperation", "GetItem"]);
}

#[test]
fn test_operation_output_shape_lookup() {
    let model = json_model();
    let op = &model.operations()["APostOperation"];
    let output = model.operation_output_shape(op).expect("output shape should resolve");
    assert!(output.has_streaming_member);

    // GetItemResponse was never added as a shape
    let missing = &model.operations()["GetItem"];
    assert!(model.operation_output_shape(missing).is_none());
}

#[test]
fn test_operation_input_shape_lookup() {
    let model = json_model();
    let op = &model.operations()["APostOperation"];
    let input = model.operation_input_shape(op).expect("input shape should resolve");
    assert_eq!(input.shape_type, ShapeType::Request);
    assert!(model.operation_input_shape(&model.operations()["GetItem"]).is_none());
}

#[test]
fn test_json_version_defaults_for_json_family() {
    let model = json_model();
    assert!(model.is_json_protocol());
    assert_eq!(model.json_version(), Some("1.1"));

    let mut metadata =
        ServiceMetadata::new("Query", "software.amazon.awssdk.services.query", ProtocolKind::Query);
    let query = ServiceModel::builder().metadata(metadata.clone()).build().expect("query model");
    assert_eq!(query.json_version(), None);

    metadata.protocol = ProtocolKind::Cbor;
    metadata.json_version = Some("1.0".to_string());
    let cbor = ServiceModel::builder().metadata(metadata).build().expect("cbor model");
    assert!(cbor.is_cbor_protocol());
    assert!(!cbor.is_ion_protocol());
    assert_eq!(cbor.json_version(), Some("1.0"));
}

#[test]
fn test_metadata_defaults() {
    let model = json_model();
    let metadata = model.metadata();
    assert_eq!(metadata.endpoint_prefix, "json");
    assert_eq!(metadata.signing_name(), "json");
    assert_eq!(metadata.base_exception_name(), "JsonException");
    assert_eq!(metadata.signature_version, SignatureVersion::V4);
    assert_eq!(metadata.model_package(), "software.amazon.awssdk.services.json.model");
    assert_eq!(metadata.transform_package(), "software.amazon.awssdk.services.json.transform");
}

#[test]
fn test_builder_requires_metadata() {
    let err = ServiceModel::builder().build().unwrap_err();
    assert!(matches!(err, ModelError::Missing(ref what) if what == "metadata"));
}

#[test]
fn test_from_json_rejects_unknown_protocol() {
    let doc = r#"{
        "metadata": {
            "serviceName": "Smoke",
            "clientPackageName": "software.amazon.awssdk.services.smoke",
            "endpointPrefix": "smoke",
            "protocol": "smoke-signals"
        }
    }"#;
    let err = ServiceModel::from_json(doc).unwrap_err();
    assert!(err.to_string().contains("smoke-signals"), "unexpected error: {err}");
}

#[test]
fn test_from_json_rejects_blank_service_name() {
    let doc = r#"{
        "metadata": {
            "serviceName": " ",
            "clientPackageName": "software.amazon.awssdk.services.blank",
            "endpointPrefix": "blank",
            "protocol": "json"
        }
    }"#;
    let err = ServiceModel::from_json(doc).unwrap_err();
    assert!(matches!(err, ModelError::Missing(_)));
}

#[test]
fn test_from_file() {
    let doc = r#"{
        "metadata": {
            "serviceName": "Ec2",
            "clientPackageName": "software.amazon.awssdk.services.ec2",
            "endpointPrefix": "ec2",
            "protocol": "ec2",
            "signatureVersion": "v2"
        },
        "customization": { "calculateCrc32FromCompressedData": true },
        "operations": {},
        "shapes": {
            "DryRunException": { "name": "DryRunException", "shapeType": "Exception" }
        }
    }"#;
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(doc.as_bytes()).expect("write model");

    let model = ServiceModel::from_file(file.path()).expect("model should load");
    assert_eq!(model.protocol(), ProtocolKind::Ec2);
    assert_eq!(model.metadata().signature_version, SignatureVersion::V2);
    assert!(model.customization().calculate_crc32_from_compressed_data);
    assert!(!model.has_waiters());

    let exception = model.exceptions().next().expect("one exception");
    assert_eq!(exception.error_code_or_name(), "DryRunException");
}

#[test]
fn test_from_file_missing() {
    let err = ServiceModel::from_file("/nonexistent/quill/model.json").unwrap_err();
    assert!(matches!(err, ModelError::Io(_)));
}

#[test]
fn test_bundled_models_load() {
    let root = concat!(env!("CARGO_MANIFEST_DIR"), "/../../resources/models");
    let json = ServiceModel::from_file(format!("{root}/json-service.json")).expect("json model");
    assert_eq!(json.protocol(), ProtocolKind::Json);
    assert!(json.has_waiters());
    assert_eq!(json.exceptions().count(), 1);

    let query = ServiceModel::from_file(format!("{root}/query-service.json")).expect("query model");
    assert_eq!(query.exceptions().count(), 2);
    assert_eq!(
        query.customization().service_specific_client_config_class.as_deref(),
        Some("QueryAdvancedConfiguration")
    );
}
