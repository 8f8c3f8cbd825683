use super::{ArtifactGenerator, Context};
use crate::error::GenerateError;
use crate::fragment::Fragment;
use crate::keywords::{KeywordMap, Replacement, Token};
use crate::ArtifactKind;

/// Generates the `<Name>Plugin.json` schema document.
pub struct SchemaGenerator<'a> {
    ctx: Context<'a>,
}

impl<'a> SchemaGenerator<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    fn cppref(&self) -> Replacement {
        let regular = self.ctx.descriptor.regular_interfaces();
        let last = regular.len().saturating_sub(1);
        Replacement::or_omit(Fragment::from_lines(regular.iter().enumerate().map(
            |(n, i)| {
                let sep = if n < last { "," } else { "" };
                format!("{{ \"$cppref\": \"{{cppinterfacedir}}/{i}.h\" }}{sep}")
            },
        )))
    }

    fn json_configuration(&self) -> Result<Replacement, GenerateError> {
        if self.ctx.descriptor.has_config() {
            self.ctx
                .nested(&self.ctx.config.templates.json_configuration)
        } else {
            Ok(Replacement::Omit)
        }
    }

    fn json_interface(&self) -> Result<Replacement, GenerateError> {
        if self.ctx.descriptor.regular_interfaces().is_empty() {
            Ok(Replacement::Omit)
        } else {
            self.ctx.nested(&self.ctx.config.templates.json_interface)
        }
    }
}

impl ArtifactGenerator for SchemaGenerator<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Schema
    }

    fn context(&self) -> &Context<'_> {
        &self.ctx
    }

    fn template_id(&self) -> &str {
        &self.ctx.config.templates.plugin_json
    }

    fn keywords(&self) -> Result<KeywordMap, GenerateError> {
        let mut map = self.ctx.base_keywords();
        map.insert(Token::Cppref, self.cppref())
            .insert(Token::JsonConfiguration, self.json_configuration()?)
            .insert(Token::JsonInterface, self.json_interface()?)
            .insert(
                Token::JsonInfo,
                self.ctx.nested(&self.ctx.config.templates.json_info)?,
            );
        Ok(map)
    }
}
