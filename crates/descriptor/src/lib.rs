//! Value types describing the plugin to generate.
//!
//! A [`DescriptorSpec`] is the raw, caller supplied description (usually
//! deserialised from a descriptor file). [`PluginDescriptor::new`] checks
//! every invariant up front and produces the immutable descriptor that the
//! artifact generators read. Nothing downstream re-validates it.

pub mod naming;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use naming::{event_name_for, is_identifier, sync_name_for};

/// Interface name that marks "this component can be configured".
pub const DEFAULT_CONFIG_INTERFACE: &str = "IConfiguration";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Unvalidated plugin description as written by the user.
pub struct DescriptorSpec {
    pub name: String,
    /// Ordered; the first entry is the root interface.
    pub sync_interfaces: Vec<String>,
    pub event_interfaces: Vec<String>,
    pub notifying_interfaces: Vec<String>,
    pub out_of_process: bool,
    pub has_events: bool,
    pub has_config: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Naming facts of the target framework that validation depends on.
pub struct Conventions {
    /// Name of the configuration sentinel interface.
    pub config_interface: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            config_interface: DEFAULT_CONFIG_INTERFACE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Violated descriptor invariant.
pub enum DescriptorError {
    #[error("plugin name '{0}' is not a valid identifier")]
    InvalidName(String),
    #[error("interface name '{0}' is not a valid identifier")]
    InvalidInterfaceName(String),
    #[error("interface '{0}' is listed more than once")]
    DuplicateInterface(String),
    #[error("'{interface}' must be the last sync interface (found at position {position} of {len})")]
    ConfigurationNotLast {
        interface: String,
        position: usize,
        len: usize,
    },
    #[error("has_config is set but '{0}' is not among the sync interfaces")]
    ConfigurationMissing(String),
    #[error("'{0}' is listed as a sync interface but has_config is not set")]
    ConfigurationNotDeclared(String),
    #[error("out-of-process plugins need a root interface other than '{0}'")]
    MissingRoot(String),
    #[error("event interface '{0}' is declared but has_events is not set")]
    EventsDisabled(String),
    #[error("event interface '{event}' has no matching sync interface '{expected}'")]
    UnpairedEventInterface { event: String, expected: String },
    #[error("event interface '{event}' must be named '{expected}' to pair with a sync interface")]
    InvalidEventName { event: String, expected: String },
    #[error("notifying interface '{0}' is not a regular sync interface")]
    UnknownNotifyingInterface(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Validated, immutable plugin description.
pub struct PluginDescriptor {
    name: String,
    sync_interfaces: Vec<String>,
    event_interfaces: Vec<String>,
    notifying_interfaces: Vec<String>,
    out_of_process: bool,
    has_events: bool,
    has_config: bool,
    config_interface: String,
}

impl PluginDescriptor {
    /// Validates `spec` against the default conventions.
    ///
    /// # Example
    /// ```
    /// use descriptor::{DescriptorSpec, PluginDescriptor};
    /// let spec = DescriptorSpec {
    ///     name: "Volume".into(),
    ///     sync_interfaces: vec!["IVolume".into()],
    ///     ..Default::default()
    /// };
    /// let desc = PluginDescriptor::new(spec).unwrap();
    /// assert_eq!(desc.root(), Some("IVolume"));
    /// ```
    pub fn new(spec: DescriptorSpec) -> Result<Self, DescriptorError> {
        Self::with_conventions(spec, &Conventions::default())
    }

    /// Validates `spec`, treating `conventions.config_interface` as the
    /// configuration sentinel.
    pub fn with_conventions(
        spec: DescriptorSpec,
        conventions: &Conventions,
    ) -> Result<Self, DescriptorError> {
        let sentinel = conventions.config_interface.as_str();
        if !is_identifier(&spec.name) {
            return Err(DescriptorError::InvalidName(spec.name));
        }

        let all_names = spec
            .sync_interfaces
            .iter()
            .chain(&spec.event_interfaces)
            .chain(&spec.notifying_interfaces);
        if let Some(bad) = all_names.into_iter().find(|n| !is_identifier(n)) {
            return Err(DescriptorError::InvalidInterfaceName(bad.clone()));
        }
        check_unique(&spec.sync_interfaces)?;
        check_unique(&spec.event_interfaces)?;

        let len = spec.sync_interfaces.len();
        if let Some(position) = spec.sync_interfaces.iter().position(|s| s == sentinel) {
            if position + 1 != len {
                return Err(DescriptorError::ConfigurationNotLast {
                    interface: sentinel.to_string(),
                    position,
                    len,
                });
            }
            if !spec.has_config {
                return Err(DescriptorError::ConfigurationNotDeclared(sentinel.to_string()));
            }
        } else if spec.has_config {
            return Err(DescriptorError::ConfigurationMissing(sentinel.to_string()));
        }

        let regular = if spec.has_config {
            &spec.sync_interfaces[..len - 1]
        } else {
            &spec.sync_interfaces[..]
        };
        if spec.out_of_process && regular.is_empty() {
            return Err(DescriptorError::MissingRoot(sentinel.to_string()));
        }

        for event in &spec.event_interfaces {
            if !spec.has_events {
                return Err(DescriptorError::EventsDisabled(event.clone()));
            }
            let expected = sync_name_for(event);
            let canonical = event_name_for(&expected);
            if canonical != *event {
                return Err(DescriptorError::InvalidEventName {
                    event: event.clone(),
                    expected: canonical,
                });
            }
            if !regular.contains(&expected) {
                return Err(DescriptorError::UnpairedEventInterface {
                    event: event.clone(),
                    expected,
                });
            }
        }

        if let Some(unknown) = spec
            .notifying_interfaces
            .iter()
            .find(|n| !regular.contains(n))
        {
            return Err(DescriptorError::UnknownNotifyingInterface(unknown.clone()));
        }
        // Keep notifying interfaces in sync order so emitted code never
        // depends on how the caller listed them.
        let notifying: Vec<String> = regular
            .iter()
            .filter(|s| spec.notifying_interfaces.contains(s))
            .cloned()
            .collect();

        Ok(Self {
            name: spec.name,
            sync_interfaces: spec.sync_interfaces,
            event_interfaces: spec.event_interfaces,
            notifying_interfaces: notifying,
            out_of_process: spec.out_of_process,
            has_events: spec.has_events,
            has_config: spec.has_config,
            config_interface: sentinel.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upper-cased plugin name, used in build and configuration variables.
    pub fn name_caps(&self) -> String {
        self.name.to_uppercase()
    }

    /// All sync interfaces, the configuration sentinel included.
    pub fn sync_interfaces(&self) -> &[String] {
        &self.sync_interfaces
    }

    /// Sync interfaces before the configuration sentinel.
    pub fn regular_interfaces(&self) -> &[String] {
        if self.has_config {
            &self.sync_interfaces[..self.sync_interfaces.len() - 1]
        } else {
            &self.sync_interfaces
        }
    }

    pub fn event_interfaces(&self) -> &[String] {
        &self.event_interfaces
    }

    /// Notifying interfaces, in sync interface order.
    pub fn notifying_interfaces(&self) -> &[String] {
        &self.notifying_interfaces
    }

    pub fn out_of_process(&self) -> bool {
        self.out_of_process
    }

    pub fn has_events(&self) -> bool {
        self.has_events
    }

    pub fn has_config(&self) -> bool {
        self.has_config
    }

    /// Name of the configuration sentinel interface.
    pub fn config_interface(&self) -> &str {
        &self.config_interface
    }

    /// The root interface: the first regular sync interface.
    pub fn root(&self) -> Option<&str> {
        self.regular_interfaces().first().map(String::as_str)
    }

    pub fn is_config_interface(&self, name: &str) -> bool {
        name == self.config_interface
    }

    pub fn is_notifying(&self, name: &str) -> bool {
        self.notifying_interfaces.iter().any(|n| n == name)
    }

    /// Declared event interface paired with the sync interface `sync`.
    pub fn event_for(&self, sync: &str) -> Option<&str> {
        let wanted = event_name_for(sync);
        self.event_interfaces
            .iter()
            .find(|e| **e == wanted)
            .map(String::as_str)
    }

    /// Whether the plugin needs the nested notification sink class.
    pub fn needs_notification_sink(&self) -> bool {
        self.has_events || !self.notifying_interfaces.is_empty()
    }

    /// Whether the plugin reacts to the loss of a remote connection. Only a
    /// plugin with a notification sink can be told about it.
    pub fn handles_deactivation(&self) -> bool {
        self.needs_notification_sink()
    }
}

fn check_unique(names: &[String]) -> Result<(), DescriptorError> {
    let mut seen = HashSet::new();
    for n in names {
        if !seen.insert(n.as_str()) {
            return Err(DescriptorError::DuplicateInterface(n.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
