use super::{ArtifactGenerator, Context};
use crate::error::GenerateError;
use crate::fragment::Fragment;
use crate::keywords::{KeywordMap, Replacement, Token};
use crate::ArtifactKind;

/// Generates the `<Name>.conf.in` deployment configuration.
pub struct ConfGenerator<'a> {
    ctx: Context<'a>,
}

impl<'a> ConfGenerator<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    fn configuration_object(&self) -> Replacement {
        let d = self.ctx.descriptor;
        if d.out_of_process() || d.has_config() {
            Replacement::inline("configuration = JSON()")
        } else {
            Replacement::Omit
        }
    }

    fn oop_root(&self) -> Replacement {
        let d = self.ctx.descriptor;
        if !d.out_of_process() {
            return Replacement::Omit;
        }
        Replacement::Text(Fragment::from_lines([
            "rootobject = JSON()".to_string(),
            format!("rootobject.add(\"mode\", \"@PLUGIN_{}_MODE@\")", d.name_caps()),
            "configuration.add(\"root\", rootobject)".to_string(),
        ]))
    }

    fn config(&self) -> Replacement {
        if self.ctx.descriptor.has_config() {
            Replacement::inline("configuration.add(\"example\", \"mystring\")")
        } else {
            Replacement::Omit
        }
    }
}

impl ArtifactGenerator for ConfGenerator<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Config
    }

    fn context(&self) -> &Context<'_> {
        &self.ctx
    }

    fn template_id(&self) -> &str {
        &self.ctx.config.templates.plugin_conf
    }

    fn keywords(&self) -> Result<KeywordMap, GenerateError> {
        let mut map = self.ctx.base_keywords();
        map.insert(
            Token::PluginStartmode,
            format!("\"@PLUGIN_{}_STARTMODE@\"", self.ctx.descriptor.name_caps()),
        )
        .insert(Token::ConfigurationObject, self.configuration_object())
        .insert(Token::OopRoot, self.oop_root())
        .insert(Token::Config, self.config());
        Ok(map)
    }
}
