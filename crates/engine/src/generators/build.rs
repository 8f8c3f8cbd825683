use super::{ArtifactGenerator, Context};
use crate::error::GenerateError;
use crate::fragment::Fragment;
use crate::keywords::{KeywordMap, Replacement, Token};
use crate::ArtifactKind;

/// Generates `CMakeLists.txt`.
pub struct BuildGenerator<'a> {
    ctx: Context<'a>,
}

impl<'a> BuildGenerator<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    fn source_files(&self) -> Replacement {
        let d = self.ctx.descriptor;
        let mut f = Fragment::single(format!("{}.cpp", d.name()));
        if d.out_of_process() {
            f.line(format!("{}Implementation.cpp", d.name()));
        }
        f.line("Module.cpp");
        Replacement::Text(f)
    }

    fn set_mode(&self) -> Replacement {
        let d = self.ctx.descriptor;
        if !d.out_of_process() {
            return Replacement::Omit;
        }
        Replacement::inline(format!(
            "set(PLUGIN_{}_MODE \"Local\" CACHE STRING \"Controls if the plugin should run in its own process, in process or remote.\")",
            d.name_caps()
        ))
    }
}

impl ArtifactGenerator for BuildGenerator<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::BuildDescriptor
    }

    fn context(&self) -> &Context<'_> {
        &self.ctx
    }

    fn template_id(&self) -> &str {
        &self.ctx.config.templates.cmake
    }

    fn keywords(&self) -> Result<KeywordMap, GenerateError> {
        let mut map = self.ctx.base_keywords();
        map.insert(Token::SourceFiles, self.source_files())
            .insert(Token::SetMode, self.set_mode());
        Ok(map)
    }
}
