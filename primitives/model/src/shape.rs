//! Shapes: the data types a service exchanges.

use serde::{Deserialize, Serialize};

/// Role a shape plays in the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    /// Operation input.
    Request,
    /// Operation output.
    Response,
    /// Plain structure nested in requests or responses.
    Model,
    /// Modeled service error.
    Exception,
    /// Enumeration of string constants.
    Enum,
}

/// A named shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeModel {
    /// Shape name, also the generated class name.
    pub name: String,
    /// Role of the shape.
    pub shape_type: ShapeType,
    /// Error code on the wire for exception shapes.
    #[serde(default)]
    pub error_code: Option<String>,
    /// Whether a member of this shape is streamed.
    #[serde(default)]
    pub has_streaming_member: bool,
    /// Whether a blob member is the entire payload.
    #[serde(default)]
    pub has_blob_member_as_payload: bool,
    /// Shape documentation.
    #[serde(default)]
    pub documentation: Option<String>,
}

impl ShapeModel {
    /// A shape with the given name and role and no flags set.
    pub fn new(name: impl Into<String>, shape_type: ShapeType) -> Self {
        Self {
            name: name.into(),
            shape_type,
            error_code: None,
            has_streaming_member: false,
            has_blob_member_as_payload: false,
            documentation: None,
        }
    }

    /// An exception shape with a wire error code.
    pub fn exception(name: impl Into<String>, error_code: impl Into<String>) -> Self {
        let mut shape = Self::new(name, ShapeType::Exception);
        shape.error_code = Some(error_code.into());
        shape
    }

    /// Mark a member of this shape as streamed.
    pub fn with_streaming_member(mut self) -> Self {
        self.has_streaming_member = true;
        self
    }

    /// Mark a blob member as the full payload.
    pub fn with_blob_payload(mut self) -> Self {
        self.has_blob_member_as_payload = true;
        self
    }

    /// Whether this shape is a modeled exception.
    pub fn is_exception(&self) -> bool { self.shape_type == ShapeType::Exception }

    /// Error code for an exception, defaulting to the shape name.
    pub fn error_code_or_name(&self) -> &str {
        self.error_code.as_deref().unwrap_or(&self.name)
    }
}
