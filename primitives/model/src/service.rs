//! The service model aggregate.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::operation::OperationModel;
use crate::protocol::{ProtocolKind, SignatureVersion};
use crate::shape::ShapeModel;
use crate::{ModelError, Result};

/// JSON protocol version used when the model does not declare one.
pub const DEFAULT_JSON_VERSION: &str = "1.1";

/// Service-wide metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    /// Service name used to derive class names, e.g. `Json`.
    pub service_name: String,
    /// Java package of the client classes.
    pub client_package_name: String,
    /// Endpoint prefix of the service.
    pub endpoint_prefix: String,
    /// Name used when signing requests; the endpoint prefix when absent.
    #[serde(default)]
    pub signing_name: Option<String>,
    /// Wire protocol.
    pub protocol: ProtocolKind,
    /// Declared JSON protocol version.
    #[serde(default)]
    pub json_version: Option<String>,
    /// Content type that replaces the protocol default.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Base exception class name; `{service}Exception` when absent.
    #[serde(default)]
    pub base_exception_name: Option<String>,
    /// Request signing scheme.
    #[serde(default)]
    pub signature_version: SignatureVersion,
    /// API version string.
    #[serde(default)]
    pub api_version: Option<String>,
}

impl ServiceMetadata {
    /// Metadata with the endpoint prefix derived from the service name and all
    /// optional values left unset.
    pub fn new(
        service_name: impl Into<String>,
        client_package_name: impl Into<String>,
        protocol: ProtocolKind,
    ) -> Self {
        let service_name = service_name.into();
        Self {
            endpoint_prefix: service_name.to_lowercase(),
            client_package_name: client_package_name.into(),
            signing_name: None,
            protocol,
            json_version: None,
            content_type: None,
            base_exception_name: None,
            signature_version: SignatureVersion::default(),
            api_version: None,
            service_name,
        }
    }

    /// Signing name, falling back to the endpoint prefix.
    pub fn signing_name(&self) -> &str {
        self.signing_name.as_deref().unwrap_or(&self.endpoint_prefix)
    }

    /// Base exception class name.
    pub fn base_exception_name(&self) -> String {
        self.base_exception_name
            .clone()
            .unwrap_or_else(|| format!("{}Exception", self.service_name))
    }

    /// Package holding the model classes.
    pub fn model_package(&self) -> String { format!("{}.model", self.client_package_name) }

    /// Package holding marshallers and unmarshallers.
    pub fn transform_package(&self) -> String {
        format!("{}.transform", self.client_package_name)
    }

    /// Package holding waiters.
    pub fn waiters_package(&self) -> String { format!("{}.waiters", self.client_package_name) }

    /// Package holding presigners.
    pub fn presign_package(&self) -> String { format!("{}.presign", self.client_package_name) }
}

/// Customizations that change the shape of the generated client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationConfig {
    /// Service-specific advanced configuration class, simple or fully-qualified.
    #[serde(default)]
    pub service_specific_client_config_class: Option<String>,
    /// Presigner class, simple or fully-qualified.
    #[serde(default)]
    pub presigners_fqcn: Option<String>,
    /// Whether CRC32 checksums are computed over compressed response data.
    #[serde(default)]
    pub calculate_crc32_from_compressed_data: bool,
    /// Java expression producing service-specific HTTP configuration.
    #[serde(default)]
    pub service_specific_http_config: Option<String>,
}

/// Read-only description of one service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceModel {
    metadata: ServiceMetadata,
    #[serde(default)]
    customization: CustomizationConfig,
    #[serde(default)]
    operations: IndexMap<String, OperationModel>,
    #[serde(default)]
    shapes: IndexMap<String, ShapeModel>,
    #[serde(default)]
    has_waiters: bool,
}

impl ServiceModel {
    /// Start building a model programmatically.
    pub fn builder() -> ServiceModelBuilder { ServiceModelBuilder::default() }

    /// Load a model from a JSON document on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a model from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: ServiceModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.metadata.service_name.trim().is_empty() {
            return Err(ModelError::Missing("metadata.serviceName".to_string()));
        }
        if self.metadata.client_package_name.trim().is_empty() {
            return Err(ModelError::Missing("metadata.clientPackageName".to_string()));
        }
        Ok(())
    }

    /// Service metadata.
    pub fn metadata(&self) -> &ServiceMetadata { &self.metadata }

    /// Client customizations.
    pub fn customization(&self) -> &CustomizationConfig { &self.customization }

    /// Operations in declaration order.
    pub fn operations(&self) -> &IndexMap<String, OperationModel> { &self.operations }

    /// Shapes in declaration order.
    pub fn shapes(&self) -> &IndexMap<String, ShapeModel> { &self.shapes }

    /// Whether the service declares waiters.
    pub fn has_waiters(&self) -> bool { self.has_waiters }

    /// Wire protocol.
    pub fn protocol(&self) -> ProtocolKind { self.metadata.protocol }

    /// Exception shapes in declaration order.
    pub fn exceptions(&self) -> impl Iterator<Item = &ShapeModel> + '_ {
        self.shapes.values().filter(|shape| shape.is_exception())
    }

    /// Input shape of `operation`, if the model contains it.
    pub fn operation_input_shape(&self, operation: &OperationModel) -> Option<&ShapeModel> {
        self.shapes.get(&operation.input_shape)
    }

    /// Output shape of `operation`, if it declares one that the model contains.
    pub fn operation_output_shape(&self, operation: &OperationModel) -> Option<&ShapeModel> {
        operation.output_shape.as_ref().and_then(|name| self.shapes.get(name))
    }

    /// Whether the protocol belongs to the JSON family.
    pub fn is_json_protocol(&self) -> bool { self.protocol().is_json_family() }

    /// Whether the protocol is CBOR.
    pub fn is_cbor_protocol(&self) -> bool { self.protocol() == ProtocolKind::Cbor }

    /// Whether the protocol is Ion.
    pub fn is_ion_protocol(&self) -> bool { self.protocol() == ProtocolKind::Ion }

    /// JSON protocol version: the declared one, or `1.1` for JSON-family
    /// protocols that do not declare one.
    pub fn json_version(&self) -> Option<&str> {
        match self.metadata.json_version.as_deref() {
            Some(version) => Some(version),
            None if self.is_json_protocol() => Some(DEFAULT_JSON_VERSION),
            None => None,
        }
    }
}

/// Builder for [`ServiceModel`].
#[derive(Debug, Default)]
pub struct ServiceModelBuilder {
    metadata: Option<ServiceMetadata>,
    customization: CustomizationConfig,
    operations: IndexMap<String, OperationModel>,
    shapes: IndexMap<String, ShapeModel>,
    has_waiters: bool,
}

impl ServiceModelBuilder {
    /// Set the service metadata.
    pub fn metadata(mut self, metadata: ServiceMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the customizations.
    pub fn customization(mut self, customization: CustomizationConfig) -> Self {
        self.customization = customization;
        self
    }

    /// Add an operation, keyed by its name.
    pub fn operation(mut self, operation: OperationModel) -> Self {
        self.operations.insert(operation.name.clone(), operation);
        self
    }

    /// Add a shape, keyed by its name.
    pub fn shape(mut self, shape: ShapeModel) -> Self {
        self.shapes.insert(shape.name.clone(), shape);
        self
    }

    /// Declare whether the service has waiters.
    pub fn has_waiters(mut self, has_waiters: bool) -> Self {
        self.has_waiters = has_waiters;
        self
    }

    /// Build the model.
    pub fn build(self) -> Result<ServiceModel> {
        let metadata = self.metadata.ok_or_else(|| ModelError::Missing("metadata".to_string()))?;
        let model = ServiceModel {
            metadata,
            customization: self.customization,
            operations: self.operations,
            shapes: self.shapes,
            has_waiters: self.has_waiters,
        };
        model.validate()?;
        Ok(model)
    }
}
