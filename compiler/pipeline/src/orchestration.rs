//! Pipeline orchestration for the main entry points.

use std::path::PathBuf;

use codegen::protocol::{self, ProtocolSpec};
use codegen::{
    AsyncClientBuilderClass, AsyncClientClass, AsyncClientInterface, BaseClientBuilderClass,
    BuilderFlavour, ClassSpec, ClientBuilderInterface, SyncClientBuilderClass, SyncClientClass,
    SyncClientInterface,
};
use config::{Config, EmitterConfig};
use decl::{ClassName, JavaFile};
use model::{ProtocolKind, ServiceModel};
use tracing::{debug, info};

use crate::generation_context::GenerationContext;
use crate::writer::write_generated;
use crate::{GeneratedFile, PipelineError, Result};

/// What generating a service would produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePlan {
    /// Service name
    pub service: String,
    /// Protocol declared by the model
    pub protocol: ProtocolKind,
    /// Name of the strategy serving that protocol
    pub strategy: &'static str,
    /// Every generated type, in generation order
    pub types: Vec<ClassName>,
}

/// The client family in its fixed order: the four clients, then the builders.
fn class_specs<'a>(
    model: &'a ServiceModel,
    protocol: &'a dyn ProtocolSpec,
) -> Result<Vec<Box<dyn ClassSpec + 'a>>> {
    let specs: Vec<Box<dyn ClassSpec + 'a>> = vec![
        Box::new(SyncClientInterface::new(model)?),
        Box::new(SyncClientClass::new(model, protocol)?),
        Box::new(AsyncClientInterface::new(model)?),
        Box::new(AsyncClientClass::new(model)?),
        Box::new(BaseClientBuilderClass::new(model)?),
        Box::new(ClientBuilderInterface::new(model, BuilderFlavour::Sync)?),
        Box::new(SyncClientBuilderClass::new(model)?),
        Box::new(ClientBuilderInterface::new(model, BuilderFlavour::Async)?),
        Box::new(AsyncClientBuilderClass::new(model)?),
    ];
    Ok(specs)
}

/// Describe the types a model would generate without rendering them.
pub fn plan(model: &ServiceModel) -> Result<ServicePlan> {
    let strategy = protocol::resolve(model.protocol(), model)?;
    let types = class_specs(model, strategy.as_ref())?.iter().map(|spec| spec.class_name()).collect();
    Ok(ServicePlan {
        service: model.metadata().service_name.clone(),
        protocol: model.protocol(),
        strategy: strategy.name(),
        types,
    })
}

/// Render every type of the client family with the default emitter settings.
pub fn generate_service(model: &ServiceModel) -> Result<Vec<GeneratedFile>> {
    render_service(model, &EmitterConfig::default())
}

fn render_service(model: &ServiceModel, emitter: &EmitterConfig) -> Result<Vec<GeneratedFile>> {
    let strategy = protocol::resolve(model.protocol(), model)?;
    let mut files = Vec::new();
    for spec in class_specs(model, strategy.as_ref())? {
        let class_name = spec.class_name();
        let mut file = JavaFile::new(class_name.package(), spec.type_decl()?)
            .generated_value(emitter.generated_value());
        if let Some(comment) = &emitter.file_comment {
            file = file.file_comment(comment.clone());
        }
        let source = file.render()?;
        debug!(class = %class_name, bytes = source.len(), "rendered compilation unit");
        files.push(GeneratedFile { path: PathBuf::from(file.relative_path()), source });
    }
    info!(
        service = %model.metadata().service_name,
        protocol = %model.protocol(),
        files = files.len(),
        "generated client family"
    );
    Ok(files)
}

impl GenerationContext {
    /// Render the client family with this context's emitter settings.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> { render_service(&self.model, &self.emitter) }

    /// Render and write the client family, returning the written paths.
    pub fn generate_and_write(&self) -> Result<Vec<PathBuf>> {
        let files = self.generate()?;
        write_generated(&self.output_dir, &files)
    }
}

/// Run the pipeline described by `config`: load the model, generate, write.
pub fn run(config: &Config) -> Result<Vec<PathBuf>> {
    let model_path =
        config.codegen.model_path.as_ref().ok_or(PipelineError::Missing("codegen.model_path"))?;
    info!(model = %model_path.display(), "loading service model");
    let model = ServiceModel::from_file(model_path)?;

    let ctx = GenerationContext::builder()
        .model(model)
        .output_dir(config.codegen.output_dir.clone())
        .emitter(config.emitter.clone())
        .build()?;
    let written = ctx.generate_and_write()?;
    info!(
        service = ctx.service_name(),
        output = %ctx.output_dir.display(),
        files = written.len(),
        "wrote generated sources"
    );
    Ok(written)
}
