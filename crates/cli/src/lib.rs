//! Common utilities for the command line interface.
use loader::{DirTemplateStore, EmbeddedTemplates, LayeredTemplateStore, TemplateStore};
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing::debug;

pub mod args;
pub mod config;
pub mod generate;
pub mod output;
pub mod templates;
pub mod ui;

/// Installs the stderr log subscriber. `quiet` wins over `debug`.
pub fn init_logging(debug: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::OFF
    } else if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    if debug && !quiet {
        debug!("Debug mode enabled");
    }
}

/// Built-in templates, with the files of `overrides` taking precedence when
/// a directory is given.
///
/// # Example
///
/// ```
/// use loader::TemplateStore;
/// let store = skelgen::template_store(None).unwrap();
/// assert!(store.read("plugin-header").is_ok());
/// ```
pub fn template_store(overrides: Option<&Path>) -> anyhow::Result<Box<dyn TemplateStore>> {
    match overrides {
        Some(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("template directory {} does not exist", dir.display());
            }
            debug!(dir = %dir.display(), "Using template overrides");
            Ok(Box::new(LayeredTemplateStore::new(
                DirTemplateStore::new(dir),
                EmbeddedTemplates,
            )))
        }
        None => Ok(Box::new(EmbeddedTemplates)),
    }
}
