//! Loads plugin descriptors from YAML, JSON or TOML files and provides the
//! template stores the generators read from.

use anyhow::{bail, Context};
use descriptor::{Conventions, DescriptorSpec, PluginDescriptor};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod embedded;
mod store;
mod walk;

pub use embedded::EmbeddedTemplates;
pub use store::{
    DirTemplateStore, LayeredTemplateStore, MemoryTemplateStore, TemplateError, TemplateStore,
    TEMPLATE_EXTENSION,
};
pub use walk::visit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Serialisation formats accepted for descriptor files.
pub enum DescriptorFormat {
    Yaml,
    Json,
    Toml,
}

impl DescriptorFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parses descriptor text in the given format without validating it.
pub fn parse_descriptor(text: &str, format: DescriptorFormat) -> anyhow::Result<DescriptorSpec> {
    let spec = match format {
        DescriptorFormat::Yaml => serde_yaml::from_str(text).context("invalid YAML descriptor")?,
        DescriptorFormat::Json => serde_json::from_str(text).context("invalid JSON descriptor")?,
        DescriptorFormat::Toml => toml::from_str(text).context("invalid TOML descriptor")?,
    };
    Ok(spec)
}

/// Reads a descriptor file without validating it.
pub fn load_descriptor(path: &Path) -> anyhow::Result<DescriptorSpec> {
    let Some(format) = DescriptorFormat::from_path(path) else {
        bail!(
            "unsupported descriptor extension: {} (expected .yaml, .yml, .json or .toml)",
            path.display()
        );
    };
    debug!(file = %path.display(), ?format, "Parsing descriptor");
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_descriptor(&text, format).with_context(|| format!("in {}", path.display()))
}

/// Reads and validates a descriptor file.
///
/// # Example
/// ```no_run
/// use descriptor::Conventions;
/// use loader::load_plugin_descriptor;
/// use std::path::Path;
/// let desc = load_plugin_descriptor(Path::new("plugin.yaml"), &Conventions::default()).unwrap();
/// println!("{}", desc.name());
/// ```
pub fn load_plugin_descriptor(
    path: &Path,
    conventions: &Conventions,
) -> anyhow::Result<PluginDescriptor> {
    let spec = load_descriptor(path)?;
    let desc = PluginDescriptor::with_conventions(spec, conventions)
        .with_context(|| format!("invalid descriptor {}", path.display()))?;
    info!(
        plugin = desc.name(),
        interfaces = desc.sync_interfaces().len(),
        out_of_process = desc.out_of_process(),
        "Descriptor loaded"
    );
    Ok(desc)
}

/// Writes every template of `store` below `dir` as `<id>.tmpl`, so it can be
/// edited and used as an override directory.
///
/// Existing files are left untouched unless `overwrite` is set.
pub fn export_templates(
    store: &dyn TemplateStore,
    dir: &Path,
    overwrite: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for id in store.ids() {
        let text = store.read(&id)?;
        let path = dir.join(format!("{id}.{TEMPLATE_EXTENSION}"));
        if path.exists() && !overwrite {
            debug!(path = %path.display(), "Template exists, skipped");
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    debug!(root = %dir.display(), count = written.len(), "Templates exported");
    Ok(written)
}

#[cfg(test)]
mod tests;
