//! Template stores: where the generators get their raw template text.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::walk::visit;

/// File extension of templates kept on disk.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

#[derive(Debug, Error)]
/// Failure to obtain a template.
pub enum TemplateError {
    #[error("template '{id}' not found")]
    NotFound { id: String },
    #[error("failed to read template '{id}' from {}", path.display())]
    Io {
        id: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TemplateError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TemplateError::NotFound { .. })
    }
}

/// Source of raw template text, keyed by identifier.
///
/// Reads must be idempotent: reading the same id twice yields the same text.
pub trait TemplateStore: Send + Sync {
    /// Returns the raw text of template `id`.
    fn read(&self, id: &str) -> Result<String, TemplateError>;

    /// Identifiers known to this store, sorted.
    fn ids(&self) -> Vec<String>;
}

impl<T: TemplateStore + ?Sized> TemplateStore for &T {
    fn read(&self, id: &str) -> Result<String, TemplateError> {
        (**self).read(id)
    }

    fn ids(&self) -> Vec<String> {
        (**self).ids()
    }
}

impl<T: TemplateStore + ?Sized> TemplateStore for Box<T> {
    fn read(&self, id: &str) -> Result<String, TemplateError> {
        (**self).read(id)
    }

    fn ids(&self) -> Vec<String> {
        (**self).ids()
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store, mostly useful for tests and embedding.
pub struct MemoryTemplateStore {
    templates: BTreeMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces template `id`.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.templates.insert(id.into(), text.into());
        self
    }

    /// Builder form of [`MemoryTemplateStore::insert`].
    pub fn with(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn read(&self, id: &str) -> Result<String, TemplateError> {
        self.templates
            .get(id)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound { id: id.to_string() })
    }

    fn ids(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }
}

#[derive(Debug, Clone)]
/// Templates stored as `<root>/<id>.tmpl` files.
///
/// Ids may contain `/` to address templates in sub-directories.
pub struct DirTemplateStore {
    root: PathBuf,
}

impl DirTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in id.split('/') {
            path.push(part);
        }
        path.set_extension(TEMPLATE_EXTENSION);
        path
    }
}

impl TemplateStore for DirTemplateStore {
    fn read(&self, id: &str) -> Result<String, TemplateError> {
        let path = self.path_for(id);
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(id, path = %path.display(), "Template read from disk");
                Ok(text)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(TemplateError::NotFound { id: id.to_string() })
            }
            Err(source) => Err(TemplateError::Io {
                id: id.to_string(),
                path,
                source,
            }),
        }
    }

    fn ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        let result = visit(&self.root, &mut |path: &Path| {
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
                return Ok(());
            }
            let rel = path.strip_prefix(&self.root)?.with_extension("");
            let id: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            ids.push(id.join("/"));
            Ok(())
        });
        if let Err(e) = result {
            debug!(root = %self.root.display(), error = %e, "Could not list templates");
        }
        ids.sort();
        ids
    }
}

#[derive(Debug, Clone)]
/// Looks templates up in `overlay` first and falls back to `base` for
/// anything the overlay does not define.
pub struct LayeredTemplateStore<O, B> {
    overlay: O,
    base: B,
}

impl<O, B> LayeredTemplateStore<O, B> {
    pub fn new(overlay: O, base: B) -> Self {
        Self { overlay, base }
    }
}

impl<O: TemplateStore, B: TemplateStore> TemplateStore for LayeredTemplateStore<O, B> {
    fn read(&self, id: &str) -> Result<String, TemplateError> {
        match self.overlay.read(id) {
            Err(e) if e.is_not_found() => self.base.read(id),
            other => other,
        }
    }

    fn ids(&self) -> Vec<String> {
        let mut ids = self.overlay.ids();
        ids.extend(self.base.ids());
        ids.sort();
        ids.dedup();
        ids
    }
}
