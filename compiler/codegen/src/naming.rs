//! Class and variable names derived from a service model.

use decl::ClassName;
use model::naming::is_java_keyword;
use model::{OperationModel, ServiceModel, ShapeModel};
use regex::Regex;

use crate::{CodegenError, Result};

/// Whether `name` is a single Java identifier that is not a keyword.
pub fn is_java_identifier(name: &str) -> Result<bool> {
    let re = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$")
        .map_err(|e: regex::Error| CodegenError::MissingModelData(e.to_string()))?;
    Ok(re.is_match(name) && !is_java_keyword(name))
}

/// Whether `name` is a dot-separated sequence of Java identifiers.
pub fn is_qualified_name(name: &str) -> Result<bool> {
    for segment in name.split('.') {
        if !is_java_identifier(segment)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn require_identifier(name: &str, what: &str) -> Result<()> {
    if is_java_identifier(name)? {
        Ok(())
    } else {
        Err(CodegenError::MissingModelData(format!("{what} '{name}' is not a valid Java identifier")))
    }
}

/// Resolve a configured class name: fully-qualified names are taken as-is,
/// simple names are placed in `default_package`.
pub fn resolve_class_name(name: &str, default_package: &str, what: &str) -> Result<ClassName> {
    let name = name.trim();
    if name.is_empty() || !is_qualified_name(name)? {
        return Err(CodegenError::MissingModelData(format!("{what} '{name}' does not name a class")));
    }
    if name.contains('.') {
        Ok(ClassName::parse(name))
    } else {
        Ok(ClassName::new(default_package, name))
    }
}

/// Types and names one operation method refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationTypes {
    /// Java method name.
    pub method_name: String,
    /// Name of the request parameter.
    pub input_name: String,
    /// Request class.
    pub request: ClassName,
    /// Response class.
    pub response: ClassName,
    /// Request marshaller class.
    pub marshaller: ClassName,
    /// Response unmarshaller class.
    pub unmarshaller: ClassName,
}

/// Every class name of one service's client family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientNames {
    service: String,
    client_package: String,
    model_package: String,
    transform_package: String,
    waiters_package: String,
    presign_package: String,
    base_exception: String,
}

impl ClientNames {
    /// Derive names from the model, rejecting service and package names that
    /// cannot appear in Java source.
    pub fn new(model: &ServiceModel) -> Result<Self> {
        let metadata = model.metadata();
        require_identifier(&metadata.service_name, "service name")?;
        if !is_qualified_name(&metadata.client_package_name)? {
            return Err(CodegenError::MissingModelData(format!(
                "client package '{}' is not a valid Java package",
                metadata.client_package_name
            )));
        }
        let base_exception = metadata.base_exception_name();
        require_identifier(&base_exception, "base exception")?;

        Ok(Self {
            service: metadata.service_name.clone(),
            client_package: metadata.client_package_name.clone(),
            model_package: metadata.model_package(),
            transform_package: metadata.transform_package(),
            waiters_package: metadata.waiters_package(),
            presign_package: metadata.presign_package(),
            base_exception,
        })
    }

    /// Service name, e.g. `Json`.
    pub fn service(&self) -> &str { &self.service }

    /// Package holding the clients and builders.
    pub fn client_package(&self) -> &str { &self.client_package }

    /// `SClient`.
    pub fn sync_interface(&self) -> ClassName { self.client_class("Client", "") }

    /// `DefaultSClient`.
    pub fn sync_client(&self) -> ClassName { self.client_class("Client", "Default") }

    /// `SAsyncClient`.
    pub fn async_interface(&self) -> ClassName { self.client_class("AsyncClient", "") }

    /// `DefaultSAsyncClient`.
    pub fn async_client(&self) -> ClassName { self.client_class("AsyncClient", "Default") }

    /// `SClientBuilder`.
    pub fn sync_builder_interface(&self) -> ClassName { self.client_class("ClientBuilder", "") }

    /// `DefaultSClientBuilder`.
    pub fn sync_builder(&self) -> ClassName { self.client_class("ClientBuilder", "Default") }

    /// `SAsyncClientBuilder`.
    pub fn async_builder_interface(&self) -> ClassName {
        self.client_class("AsyncClientBuilder", "")
    }

    /// `DefaultSAsyncClientBuilder`.
    pub fn async_builder(&self) -> ClassName { self.client_class("AsyncClientBuilder", "Default") }

    /// `DefaultSBaseClientBuilder`.
    pub fn base_builder(&self) -> ClassName { self.client_class("BaseClientBuilder", "Default") }

    /// `SProtocolFactory`, used by API Gateway services.
    pub fn protocol_factory(&self) -> ClassName { self.client_class("ProtocolFactory", "") }

    /// The service's base exception in the model package.
    pub fn base_exception(&self) -> ClassName { self.model_class(&self.base_exception) }

    /// `SClientWaiters` in the waiters package.
    pub fn waiters(&self) -> ClassName {
        ClassName::new(self.waiters_package.clone(), format!("{}ClientWaiters", self.service))
    }

    /// A class in the model package.
    pub fn model_class(&self, simple_name: &str) -> ClassName {
        ClassName::new(self.model_package.clone(), simple_name)
    }

    /// A class in the transform package.
    pub fn transform_class(&self, simple_name: &str) -> ClassName {
        ClassName::new(self.transform_package.clone(), simple_name)
    }

    /// An exception shape's class in the model package.
    pub fn exception(&self, shape: &ShapeModel) -> Result<ClassName> {
        require_identifier(&shape.name, "exception shape")?;
        Ok(self.model_class(&shape.name))
    }

    /// The unmarshaller registered for an exception shape.
    pub fn exception_unmarshaller(&self, shape: &ShapeModel) -> Result<ClassName> {
        require_identifier(&shape.name, "exception shape")?;
        Ok(self.transform_class(&format!("{}Unmarshaller", shape.name)))
    }

    /// The service-specific advanced configuration class, if the model declares one.
    pub fn advanced_configuration(&self, model: &ServiceModel) -> Result<Option<ClassName>> {
        model
            .customization()
            .service_specific_client_config_class
            .as_deref()
            .map(|name| resolve_class_name(name, &self.client_package, "advanced configuration class"))
            .transpose()
    }

    /// The presigners class, if the model declares one.
    pub fn presigners(&self, model: &ServiceModel) -> Result<Option<ClassName>> {
        model
            .customization()
            .presigners_fqcn
            .as_deref()
            .map(|name| resolve_class_name(name, &self.presign_package, "presigners class"))
            .transpose()
    }

    /// Names used by one operation method.
    pub fn operation(&self, operation: &OperationModel) -> Result<OperationTypes> {
        require_identifier(&operation.method_name, "method name")?;
        require_identifier(&operation.input.variable_name, "input variable")?;
        require_identifier(&operation.input.variable_type, "input type")?;
        require_identifier(&operation.input_shape, "input shape")?;
        require_identifier(&operation.return_type, "return type")?;
        Ok(OperationTypes {
            method_name: operation.method_name.clone(),
            input_name: operation.input.variable_name.clone(),
            request: self.model_class(&operation.input.variable_type),
            response: self.model_class(&operation.return_type),
            marshaller: self.transform_class(&format!("{}Marshaller", operation.input_shape)),
            unmarshaller: self.transform_class(&format!("{}Unmarshaller", operation.return_type)),
        })
    }

    fn client_class(&self, suffix: &str, prefix: &str) -> ClassName {
        ClassName::new(self.client_package.clone(), format!("{prefix}{}{suffix}", self.service))
    }
}
