//! Turns a validated plugin descriptor into the source files of a Thunder
//! plugin skeleton by expanding templates with per-artifact keyword maps.

use descriptor::{Conventions, DescriptorSpec, PluginDescriptor};
use loader::TemplateStore;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

mod config;
mod error;
mod expand;
mod fragment;
pub mod generators;
mod keywords;

pub use config::{GeneratorConfig, TemplateIds, DEFAULT_MAX_DEPTH};
pub use error::GenerateError;
pub use expand::{expand, placeholders};
pub use fragment::{Fragment, Piece, INDENT_DECREASE_MARKER, INDENT_INCREASE_MARKER, INDENT_UNIT};
pub use generators::{
    acquisition_chain, closing_scopes, generator_for, ArtifactGenerator, Context,
};
pub use keywords::{KeywordMap, Replacement, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// The files a skeleton consists of.
pub enum ArtifactKind {
    Header,
    HeaderImplementation,
    Source,
    BuildDescriptor,
    Schema,
    Config,
    ModuleHeader,
    ModuleSource,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 8] = [
        ArtifactKind::Header,
        ArtifactKind::HeaderImplementation,
        ArtifactKind::Source,
        ArtifactKind::BuildDescriptor,
        ArtifactKind::Schema,
        ArtifactKind::Config,
        ArtifactKind::ModuleHeader,
        ArtifactKind::ModuleSource,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Header => "header",
            ArtifactKind::HeaderImplementation => "header-implementation",
            ArtifactKind::Source => "source",
            ArtifactKind::BuildDescriptor => "build-descriptor",
            ArtifactKind::Schema => "schema",
            ArtifactKind::Config => "config",
            ArtifactKind::ModuleHeader => "module-header",
            ArtifactKind::ModuleSource => "module-source",
        }
    }

    /// File name of the artifact relative to the output directory.
    pub fn file_name(self, desc: &PluginDescriptor) -> String {
        let name = desc.name();
        match self {
            ArtifactKind::Header => format!("{name}.h"),
            ArtifactKind::HeaderImplementation => format!("{name}Implementation.cpp"),
            ArtifactKind::Source => format!("{name}.cpp"),
            ArtifactKind::BuildDescriptor => "CMakeLists.txt".into(),
            ArtifactKind::Schema => format!("{name}Plugin.json"),
            ArtifactKind::Config => format!("{name}.conf.in"),
            ArtifactKind::ModuleHeader => "Module.h".into(),
            ArtifactKind::ModuleSource => "Module.cpp".into(),
        }
    }

    /// Whether the artifact is part of the skeleton for `desc`. The
    /// implementation class only exists for out-of-process plugins.
    pub fn applies_to(self, desc: &PluginDescriptor) -> bool {
        match self {
            ArtifactKind::HeaderImplementation => desc.out_of_process(),
            _ => true,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase().replace('_', "-");
        ArtifactKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| format!("unknown artifact kind '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A generated file.
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub contents: String,
}

/// Artifacts that make up the skeleton for `desc`, in output order.
pub fn planned_kinds(desc: &PluginDescriptor) -> Vec<ArtifactKind> {
    ArtifactKind::ALL
        .into_iter()
        .filter(|k| k.applies_to(desc))
        .collect()
}

/// Generates a single artifact.
pub fn generate(kind: ArtifactKind, ctx: Context<'_>) -> Result<Artifact, GenerateError> {
    let contents = generator_for(kind, ctx).generate()?;
    Ok(Artifact {
        kind,
        file_name: kind.file_name(ctx.descriptor),
        contents,
    })
}

/// Generates `kinds` in parallel. Results keep the order of `kinds`, and a
/// failing artifact does not stop the others.
pub fn generate_all(
    kinds: &[ArtifactKind],
    ctx: Context<'_>,
) -> Vec<(ArtifactKind, Result<Artifact, GenerateError>)> {
    let results: Vec<_> = kinds
        .par_iter()
        .map(|&kind| (kind, generate(kind, ctx)))
        .collect();
    for (kind, result) in &results {
        if let Err(e) = result {
            warn!(plugin = ctx.descriptor.name(), %kind, error = %e, "Artifact failed");
        }
    }
    debug!(
        plugin = ctx.descriptor.name(),
        requested = kinds.len(),
        failed = results.iter().filter(|(_, r)| r.is_err()).count(),
        "Generation finished"
    );
    results
}

/// Validates `spec` and generates every artifact of its skeleton, stopping at
/// the first failure.
pub fn generate_skeleton(
    spec: DescriptorSpec,
    conventions: &Conventions,
    store: &dyn TemplateStore,
    config: &GeneratorConfig,
) -> Result<Vec<Artifact>, GenerateError> {
    let desc = PluginDescriptor::with_conventions(spec, conventions)?;
    let ctx = Context::new(&desc, store, config);
    let kinds = planned_kinds(&desc);
    let artifacts = generate_all(&kinds, ctx)
        .into_iter()
        .map(|(_, r)| r)
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        plugin = desc.name(),
        artifacts = artifacts.len(),
        "Skeleton generated"
    );
    Ok(artifacts)
}

#[cfg(test)]
mod tests;
