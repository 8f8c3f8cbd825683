use crate::store::{TemplateError, TemplateStore};

/// Default template set compiled into the binary.
const TEMPLATES: &[(&str, &str)] = &[
    ("cmake", include_str!("../templates/cmake.tmpl")),
    ("config-class", include_str!("../templates/config-class.tmpl")),
    (
        "configure-method",
        include_str!("../templates/configure-method.tmpl"),
    ),
    (
        "deinitialize-ip",
        include_str!("../templates/deinitialize-ip.tmpl"),
    ),
    (
        "deinitialize-oop",
        include_str!("../templates/deinitialize-oop.tmpl"),
    ),
    ("initialize-ip", include_str!("../templates/initialize-ip.tmpl")),
    (
        "initialize-oop",
        include_str!("../templates/initialize-oop.tmpl"),
    ),
    (
        "json-configuration",
        include_str!("../templates/json-configuration.tmpl"),
    ),
    ("json-info", include_str!("../templates/json-info.tmpl")),
    ("json-interface", include_str!("../templates/json-interface.tmpl")),
    ("module-header", include_str!("../templates/module-header.tmpl")),
    ("module-source", include_str!("../templates/module-source.tmpl")),
    ("plugin-conf", include_str!("../templates/plugin-conf.tmpl")),
    ("plugin-header", include_str!("../templates/plugin-header.tmpl")),
    (
        "plugin-implementation",
        include_str!("../templates/plugin-implementation.tmpl"),
    ),
    ("plugin-json", include_str!("../templates/plugin-json.tmpl")),
    ("plugin-source", include_str!("../templates/plugin-source.tmpl")),
    (
        "rpc-notification-class",
        include_str!("../templates/rpc-notification-class.tmpl"),
    ),
];

#[derive(Debug, Clone, Copy, Default)]
/// The built-in templates shipped with skelgen.
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Raw `(id, text)` pairs, sorted by id.
    pub fn entries() -> &'static [(&'static str, &'static str)] {
        TEMPLATES
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn read(&self, id: &str) -> Result<String, TemplateError> {
        TEMPLATES
            .iter()
            .find(|(name, _)| *name == id)
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| TemplateError::NotFound { id: id.to_string() })
    }

    fn ids(&self) -> Vec<String> {
        TEMPLATES.iter().map(|(id, _)| id.to_string()).collect()
    }
}
