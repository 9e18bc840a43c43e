//! Operations exposed by a service.

use serde::{Deserialize, Serialize};

use crate::naming::{uncapitalize, variable_name, REQUEST_CLASS_SUFFIX, RESPONSE_CLASS_SUFFIX};

/// A named, typed variable, such as an operation's input parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableModel {
    /// Variable name as it appears in generated code.
    pub variable_name: String,
    /// Simple name of the variable's type.
    pub variable_type: String,
}

impl VariableModel {
    /// Create a variable model.
    pub fn new(variable_name: impl Into<String>, variable_type: impl Into<String>) -> Self {
        Self { variable_name: variable_name.into(), variable_type: variable_type.into() }
    }
}

/// One operation of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationModel {
    /// Operation name, e.g. `DescribeInstances`.
    pub name: String,
    /// Method name in generated clients, e.g. `describeInstances`.
    pub method_name: String,
    /// The single request parameter.
    pub input: VariableModel,
    /// Simple name of the response type.
    pub return_type: String,
    /// Name of the input shape.
    pub input_shape: String,
    /// Name of the output shape, if the operation returns a modeled body.
    #[serde(default)]
    pub output_shape: Option<String>,
    /// Operation documentation carried into the client interface.
    #[serde(default)]
    pub documentation: Option<String>,
    /// Whether the operation is deprecated.
    #[serde(default)]
    pub deprecated: bool,
}

impl OperationModel {
    /// Create an operation using the conventional request and response names.
    ///
    /// `GetItem` yields method `getItem`, input `getItemRequest: GetItemRequest`
    /// and output `GetItemResponse`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let request = format!("{name}{REQUEST_CLASS_SUFFIX}");
        let response = format!("{name}{RESPONSE_CLASS_SUFFIX}");
        Self {
            method_name: uncapitalize(&name),
            input: VariableModel::new(variable_name(&request), request.clone()),
            return_type: response.clone(),
            input_shape: request,
            output_shape: Some(response),
            documentation: None,
            deprecated: false,
            name,
        }
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Mark the operation deprecated.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Replace the request parameter, keeping the input shape.
    pub fn with_input(mut self, input: VariableModel) -> Self {
        self.input = input;
        self
    }

    /// Drop the modeled output shape.
    pub fn without_output(mut self) -> Self {
        self.output_shape = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_names() {
        let op = OperationModel::new("APostOperation");
        assert_eq!(op.method_name, "aPostOperation");
        assert_eq!(op.input.variable_name, "aPostOperationRequest");
        assert_eq!(op.input.variable_type, "APostOperationRequest");
        assert_eq!(op.return_type, "APostOperationResponse");
        assert_eq!(op.output_shape.as_deref(), Some("APostOperationResponse"));
    }
}
