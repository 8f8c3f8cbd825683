//! One generator per artifact. Each builds a fresh keyword map from the
//! descriptor and expands its top-level template with it.

use descriptor::PluginDescriptor;
use loader::TemplateStore;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::expand::expand;
use crate::fragment::Fragment;
use crate::keywords::{KeywordMap, Replacement, Token};
use crate::ArtifactKind;

mod build;
mod conf;
mod header;
mod module;
pub(crate) mod observers;
mod schema;
mod source;

pub use build::BuildGenerator;
pub use conf::ConfGenerator;
pub use header::{HeaderGenerator, HeaderVariant};
pub use module::{ModuleFile, ModuleGenerator};
pub use schema::SchemaGenerator;
pub use source::{acquisition_chain, closing_scopes, SourceGenerator};

#[derive(Clone, Copy)]
/// Everything a generator reads from: the validated descriptor, the
/// template store and the generator settings.
pub struct Context<'a> {
    pub descriptor: &'a PluginDescriptor,
    pub store: &'a dyn TemplateStore,
    pub config: &'a GeneratorConfig,
}

impl<'a> Context<'a> {
    pub fn new(
        descriptor: &'a PluginDescriptor,
        store: &'a dyn TemplateStore,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            descriptor,
            store,
            config,
        }
    }

    /// Raw text of template `id` as a nested fragment, expanded later
    /// together with the enclosing template.
    pub fn nested(&self, id: &str) -> Result<Replacement, GenerateError> {
        let text = self.store.read(id)?;
        Ok(Replacement::Text(Fragment::parse(&text)))
    }

    /// Keywords every artifact understands.
    pub fn base_keywords(&self) -> KeywordMap {
        let mut map = KeywordMap::new();
        map.insert(Token::PluginName, self.descriptor.name())
            .insert(Token::PluginNameCaps, self.descriptor.name_caps());
        map
    }
}

/// Produces the text of one artifact.
pub trait ArtifactGenerator {
    fn kind(&self) -> ArtifactKind;

    fn context(&self) -> &Context<'_>;

    /// Id of the top-level template.
    fn template_id(&self) -> &str;

    fn keywords(&self) -> Result<KeywordMap, GenerateError>;

    fn generate(&self) -> Result<String, GenerateError> {
        let ctx = self.context();
        let keywords = self.keywords()?;
        let template = ctx.store.read(self.template_id())?;
        let text = expand(&template, &keywords, ctx.config.max_depth)?;
        debug!(
            plugin = ctx.descriptor.name(),
            kind = %self.kind(),
            template = self.template_id(),
            tokens = keywords.len(),
            "Artifact generated"
        );
        Ok(text)
    }
}

/// The generator responsible for `kind`.
pub fn generator_for<'a>(kind: ArtifactKind, ctx: Context<'a>) -> Box<dyn ArtifactGenerator + 'a> {
    match kind {
        ArtifactKind::Header => Box::new(HeaderGenerator::new(ctx, HeaderVariant::Plugin)),
        ArtifactKind::HeaderImplementation => {
            Box::new(HeaderGenerator::new(ctx, HeaderVariant::Implementation))
        }
        ArtifactKind::Source => Box::new(SourceGenerator::new(ctx)),
        ArtifactKind::BuildDescriptor => Box::new(BuildGenerator::new(ctx)),
        ArtifactKind::Schema => Box::new(SchemaGenerator::new(ctx)),
        ArtifactKind::Config => Box::new(ConfGenerator::new(ctx)),
        ArtifactKind::ModuleHeader => Box::new(ModuleGenerator::new(ctx, ModuleFile::Header)),
        ArtifactKind::ModuleSource => Box::new(ModuleGenerator::new(ctx, ModuleFile::Source)),
    }
}
