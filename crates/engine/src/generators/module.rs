use super::{ArtifactGenerator, Context};
use crate::error::GenerateError;
use crate::keywords::{KeywordMap, Token};
use crate::ArtifactKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleFile {
    Header,
    Source,
}

/// Generates `Module.h` or `Module.cpp`.
pub struct ModuleGenerator<'a> {
    ctx: Context<'a>,
    file: ModuleFile,
}

impl<'a> ModuleGenerator<'a> {
    pub fn new(ctx: Context<'a>, file: ModuleFile) -> Self {
        Self { ctx, file }
    }
}

impl ArtifactGenerator for ModuleGenerator<'_> {
    fn kind(&self) -> ArtifactKind {
        match self.file {
            ModuleFile::Header => ArtifactKind::ModuleHeader,
            ModuleFile::Source => ArtifactKind::ModuleSource,
        }
    }

    fn context(&self) -> &Context<'_> {
        &self.ctx
    }

    fn template_id(&self) -> &str {
        match self.file {
            ModuleFile::Header => &self.ctx.config.templates.module_header,
            ModuleFile::Source => &self.ctx.config.templates.module_source,
        }
    }

    fn keywords(&self) -> Result<KeywordMap, GenerateError> {
        let mut map = self.ctx.base_keywords();
        map.insert(
            Token::ModulePluginName,
            format!("Plugin_{}", self.ctx.descriptor.name()),
        );
        Ok(map)
    }
}
