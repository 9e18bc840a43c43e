//! Generation context for the code generation pipeline.
//!
//! The context owns the model and everything the pipeline needs besides it:
//! where files go and how compilation units are rendered.

use std::path::PathBuf;

use config::EmitterConfig;
use model::ServiceModel;

use crate::PipelineError;

/// Context containing all inputs of one generation run
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// The service being generated
    pub model: ServiceModel,
    /// The base output directory for generated files
    pub output_dir: PathBuf,
    /// How compilation units are rendered
    pub emitter: EmitterConfig,
}

impl GenerationContext {
    /// Create a new builder for GenerationContext
    pub fn builder() -> GenerationContextBuilder { GenerationContextBuilder::default() }

    /// Service name, e.g. `Json`
    pub fn service_name(&self) -> &str { &self.model.metadata().service_name }
}

/// Builder for GenerationContext
#[derive(Debug, Default)]
pub struct GenerationContextBuilder {
    model: Option<ServiceModel>,
    output_dir: Option<PathBuf>,
    emitter: Option<EmitterConfig>,
}

impl GenerationContextBuilder {
    /// Set the service model
    pub fn model(mut self, model: ServiceModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the emitter settings (optional; defaults apply otherwise)
    pub fn emitter(mut self, emitter: EmitterConfig) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Build the GenerationContext
    pub fn build(self) -> Result<GenerationContext, PipelineError> {
        Ok(GenerationContext {
            model: self.model.ok_or(PipelineError::Missing("model"))?,
            output_dir: self.output_dir.ok_or(PipelineError::Missing("output_dir"))?,
            emitter: self.emitter.unwrap_or_default(),
        })
    }
}
