use serde::{Deserialize, Serialize};

/// Nesting depth used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Template id used for each template role.
pub struct TemplateIds {
    pub plugin_header: String,
    pub plugin_implementation: String,
    pub plugin_source: String,
    pub initialize_ip: String,
    pub initialize_oop: String,
    pub deinitialize_ip: String,
    pub deinitialize_oop: String,
    pub rpc_notification_class: String,
    pub config_class: String,
    pub configure_method: String,
    pub cmake: String,
    pub plugin_json: String,
    pub json_info: String,
    pub json_configuration: String,
    pub json_interface: String,
    pub plugin_conf: String,
    pub module_header: String,
    pub module_source: String,
}

impl Default for TemplateIds {
    fn default() -> Self {
        Self {
            plugin_header: "plugin-header".into(),
            plugin_implementation: "plugin-implementation".into(),
            plugin_source: "plugin-source".into(),
            initialize_ip: "initialize-ip".into(),
            initialize_oop: "initialize-oop".into(),
            deinitialize_ip: "deinitialize-ip".into(),
            deinitialize_oop: "deinitialize-oop".into(),
            rpc_notification_class: "rpc-notification-class".into(),
            config_class: "config-class".into(),
            configure_method: "configure-method".into(),
            cmake: "cmake".into(),
            plugin_json: "plugin-json".into(),
            json_info: "json-info".into(),
            json_configuration: "json-configuration".into(),
            json_interface: "json-interface".into(),
            plugin_conf: "plugin-conf".into(),
            module_header: "module-header".into(),
            module_source: "module-source".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Settings shared by every generator.
pub struct GeneratorConfig {
    pub templates: TemplateIds,
    /// How many times replacement values may themselves be expanded.
    pub max_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            templates: TemplateIds::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
