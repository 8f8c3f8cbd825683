use descriptor::PluginDescriptor;

use super::observers;
use super::{ArtifactGenerator, Context};
use crate::error::GenerateError;
use crate::fragment::Fragment;
use crate::keywords::{KeywordMap, Replacement, Token};
use crate::ArtifactKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which class declaration is produced.
pub enum HeaderVariant {
    /// The plugin class loaded by the host.
    Plugin,
    /// The class living in the remote process of an out-of-process plugin.
    Implementation,
}

/// Generates the plugin header or the implementation class.
pub struct HeaderGenerator<'a> {
    ctx: Context<'a>,
    variant: HeaderVariant,
}

impl<'a> HeaderGenerator<'a> {
    pub fn new(ctx: Context<'a>, variant: HeaderVariant) -> Self {
        Self { ctx, variant }
    }

    fn desc(&self) -> &'a PluginDescriptor {
        self.ctx.descriptor
    }

    /// True for the class that implements the interface methods and owns the
    /// observer lists: the plugin in-process, the implementation otherwise.
    fn owns_interfaces(&self) -> bool {
        match self.variant {
            HeaderVariant::Plugin => !self.desc().out_of_process(),
            HeaderVariant::Implementation => self.desc().out_of_process(),
        }
    }

    fn has_config_sentinel(&self) -> bool {
        let d = self.desc();
        d.sync_interfaces()
            .last()
            .is_some_and(|last| d.is_config_interface(last))
    }

    fn interface_includes(&self) -> Replacement {
        let d = self.desc();
        let mut f = Fragment::new();
        for i in d.regular_interfaces() {
            f.line(format!("#include <interfaces/{i}.h>"));
        }
        for (sync, event) in paired_events(d) {
            if d.is_notifying(&sync) {
                f.line(format!("#include <interfaces/json/{event}.h>"));
            }
        }
        Replacement::or_omit(f)
    }

    fn configuration_include(&self) -> Replacement {
        let d = self.desc();
        if d.has_config() && d.out_of_process() {
            Replacement::inline(format!("#include <interfaces/{}.h>", d.config_interface()))
        } else {
            Replacement::Omit
        }
    }

    fn inherited_classes(&self) -> Replacement {
        let d = self.desc();
        let mut bases = vec!["public PluginHost::IPlugin".to_string()];
        if d.has_events() {
            bases.push("public PluginHost::JSONRPC".into());
        }
        if !d.out_of_process() {
            bases.extend(
                d.regular_interfaces()
                    .iter()
                    .map(|i| format!("public Exchange::{i}")),
            );
        }
        Replacement::inline(bases.join(", "))
    }

    /// Interfaces the implementation class derives from.
    fn implementation_bases(&self) -> Vec<String> {
        let d = self.desc();
        let regular = d.regular_interfaces();
        let mut bases: Vec<String> = if d.out_of_process() {
            regular.to_vec()
        } else {
            regular.iter().take(1).cloned().collect()
        };
        if d.has_config() {
            bases.push(d.config_interface().to_string());
        }
        bases
    }

    fn implementation_inherited_classes(&self) -> Replacement {
        let bases = self.implementation_bases();
        if bases.is_empty() {
            return Replacement::inline("");
        }
        let list: Vec<String> = bases
            .iter()
            .map(|b| format!("public Exchange::{b}"))
            .collect();
        Replacement::inline(format!(": {}", list.join(", ")))
    }

    fn inherited_methods(&self) -> Result<Replacement, GenerateError> {
        if !self.owns_interfaces() {
            return Ok(Replacement::Omit);
        }
        let d = self.desc();
        let mut f = Fragment::new();
        for (n, i) in d.regular_interfaces().iter().enumerate() {
            if n > 0 {
                f.blank();
            }
            f.line(format!("// {i} methods"));
            match self.variant {
                HeaderVariant::Plugin => {
                    f.line(format!("uint32_t {i}Method1() override;"));
                    if d.is_notifying(i) {
                        f.extend(observers::declarations(i));
                    }
                }
                HeaderVariant::Implementation => {
                    f.line(format!("uint32_t {i}Method1() override"))
                        .line("{")
                        .indent()
                        .line("return (Core::ERROR_NONE);")
                        .dedent()
                        .line("}");
                    if d.is_notifying(i) {
                        f.blank().extend(observers::definitions(i, None));
                    }
                }
            }
        }
        if self.variant == HeaderVariant::Implementation && self.has_config_sentinel() {
            if !f.is_empty() {
                f.blank();
            }
            if let Replacement::Text(method) =
                self.ctx.nested(&self.ctx.config.templates.configure_method)?
            {
                f.extend(method);
            }
        }
        Ok(Replacement::or_omit(f))
    }

    fn notify_methods(&self) -> Replacement {
        if !self.owns_interfaces() {
            return Replacement::Omit;
        }
        let mut f = Fragment::new();
        for (n, i) in self.desc().notifying_interfaces().iter().enumerate() {
            if n > 0 {
                f.blank();
            }
            f.extend(observers::notify_method(i));
        }
        Replacement::or_omit(f)
    }

    fn plugin_methods(&self) -> Replacement {
        if self.variant == HeaderVariant::Implementation {
            return Replacement::Omit;
        }
        let d = self.desc();
        let mut f = Fragment::single(format!("void {}Method();", d.name()));
        if d.handles_deactivation() {
            f.line("void Deactivated(RPC::IRemoteConnection* connection);");
        }
        Replacement::Text(f)
    }

    fn interface_entries(&self) -> Replacement {
        let d = self.desc();
        let mut f = Fragment::new();
        if self.variant == HeaderVariant::Plugin {
            f.line("INTERFACE_ENTRY(PluginHost::IPlugin)");
            if d.has_events() {
                f.line("INTERFACE_ENTRY(PluginHost::IDispatcher)");
            }
        }
        if self.owns_interfaces() {
            for i in d.regular_interfaces() {
                f.line(format!("INTERFACE_ENTRY(Exchange::{i})"));
            }
        }
        if self.variant == HeaderVariant::Implementation && d.has_config() {
            f.line(format!("INTERFACE_ENTRY(Exchange::{})", d.config_interface()));
        }
        Replacement::or_omit(f)
    }

    fn interface_aggregates(&self) -> Replacement {
        let d = self.desc();
        if !d.out_of_process() {
            return Replacement::Omit;
        }
        Replacement::or_omit(Fragment::from_lines(d.regular_interfaces().iter().map(
            |i| format!("INTERFACE_AGGREGATE(Exchange::{i}, {})", observers::impl_member(i)),
        )))
    }

    fn base_constructor(&self) -> Replacement {
        let mut f = Fragment::single("PluginHost::IPlugin()");
        if self.desc().has_events() {
            f.line(", PluginHost::JSONRPC()");
        }
        Replacement::Text(f)
    }

    fn interface_constructor(&self) -> Replacement {
        let d = self.desc();
        let mut lines = Vec::new();
        match self.variant {
            HeaderVariant::Implementation => {
                for (n, base) in self.implementation_bases().iter().enumerate() {
                    let lead = if n == 0 { ":" } else { "," };
                    lines.push(format!("{lead} Exchange::{base}()"));
                }
            }
            HeaderVariant::Plugin if !d.out_of_process() => {
                lines.extend(
                    d.regular_interfaces()
                        .iter()
                        .map(|i| format!(", Exchange::{i}()")),
                );
            }
            HeaderVariant::Plugin => {}
        }
        if self.owns_interfaces() && !d.notifying_interfaces().is_empty() {
            let mut initializers = observers::member_initializers(d.notifying_interfaces());
            if lines.is_empty() && self.variant == HeaderVariant::Implementation {
                if let Some(first) = initializers.first_mut() {
                    first.replace_range(..1, ":");
                }
            }
            lines.extend(initializers);
        }
        Replacement::or_omit(Fragment::from_lines(lines))
    }

    fn member_impl(&self) -> Replacement {
        let d = self.desc();
        let mut f = Fragment::new();
        if d.out_of_process() {
            f.line("PluginHost::IShell* _service;")
                .line("uint32_t _connectionId;");
            for i in d.regular_interfaces() {
                f.line(format!("Exchange::{i}* {};", observers::impl_member(i)));
            }
        }
        if d.needs_notification_sink() {
            f.line("Core::SinkType<Notification> _notification;");
        }
        Replacement::or_omit(f)
    }

    fn member_constructor(&self) -> Replacement {
        let d = self.desc();
        let mut f = Fragment::new();
        if d.out_of_process() {
            f.line(", _service(nullptr)").line(", _connectionId(0)");
            for i in d.regular_interfaces() {
                f.line(format!(", {}(nullptr)", observers::impl_member(i)));
            }
        }
        if d.needs_notification_sink() {
            f.line(", _notification(*this)");
        }
        Replacement::or_omit(f)
    }

    fn observer_members(&self) -> Replacement {
        let notifying = self.desc().notifying_interfaces();
        if !self.owns_interfaces() || notifying.is_empty() {
            return Replacement::Omit;
        }
        Replacement::Text(observers::members(notifying))
    }

    fn event_notification_class(&self) -> Result<Replacement, GenerateError> {
        if self.variant == HeaderVariant::Plugin && self.desc().needs_notification_sink() {
            self.ctx
                .nested(&self.ctx.config.templates.rpc_notification_class)
        } else {
            Ok(Replacement::Omit)
        }
    }

    fn notification_class(&self) -> Replacement {
        let mut bases = vec!["public RPC::IRemoteConnection::INotification".to_string()];
        bases.extend(
            self.desc()
                .notifying_interfaces()
                .iter()
                .map(|i| format!("public Exchange::{i}::INotification")),
        );
        Replacement::inline(bases.join(", "))
    }

    fn notification_constructor(&self) -> Replacement {
        Replacement::or_omit(Fragment::from_lines(
            self.desc()
                .notifying_interfaces()
                .iter()
                .map(|i| format!(", Exchange::{i}::INotification()")),
        ))
    }

    fn notification_entries(&self) -> Replacement {
        Replacement::or_omit(Fragment::from_lines(
            self.desc()
                .notifying_interfaces()
                .iter()
                .map(|i| format!("INTERFACE_ENTRY(Exchange::{i}::INotification)")),
        ))
    }

    fn notification_functions(&self) -> Replacement {
        let d = self.desc();
        let mut f = Fragment::new();
        for (n, i) in d.notifying_interfaces().iter().enumerate() {
            if n > 0 {
                f.blank();
            }
            f.line(format!("void {i}Notification() override")).line("{");
            if let Some(event) = d.event_for(i) {
                f.indent()
                    .line(format!(
                        "Exchange::{event}::Event::{i}Notification(_parent);"
                    ))
                    .dedent();
            }
            f.line("}");
        }
        Replacement::or_omit(f)
    }

    fn config_class(&self) -> Result<Replacement, GenerateError> {
        let d = self.desc();
        let wanted = match self.variant {
            HeaderVariant::Plugin => !d.out_of_process(),
            HeaderVariant::Implementation => true,
        };
        if d.has_config() && wanted {
            self.ctx.nested(&self.ctx.config.templates.config_class)
        } else {
            Ok(Replacement::Omit)
        }
    }
}

/// `(sync, event)` pairs for every declared event interface.
pub(crate) fn paired_events(d: &PluginDescriptor) -> Vec<(String, String)> {
    d.event_interfaces()
        .iter()
        .map(|e| (descriptor::naming::sync_name_for(e), e.clone()))
        .collect()
}

impl ArtifactGenerator for HeaderGenerator<'_> {
    fn kind(&self) -> ArtifactKind {
        match self.variant {
            HeaderVariant::Plugin => ArtifactKind::Header,
            HeaderVariant::Implementation => ArtifactKind::HeaderImplementation,
        }
    }

    fn context(&self) -> &Context<'_> {
        &self.ctx
    }

    fn template_id(&self) -> &str {
        match self.variant {
            HeaderVariant::Plugin => &self.ctx.config.templates.plugin_header,
            HeaderVariant::Implementation => &self.ctx.config.templates.plugin_implementation,
        }
    }

    fn keywords(&self) -> Result<KeywordMap, GenerateError> {
        let mut map = self.ctx.base_keywords();
        map.insert(Token::InterfaceIncludes, self.interface_includes())
            .insert(Token::ConfigurationInclude, self.configuration_include())
            .insert(Token::InheritedClasses, self.inherited_classes())
            .insert(
                Token::ImplementationInheritedClasses,
                self.implementation_inherited_classes(),
            )
            .insert(Token::InheritedMethods, self.inherited_methods()?)
            .insert(Token::NotifyMethods, self.notify_methods())
            .insert(Token::PluginMethods, self.plugin_methods())
            .insert(Token::InterfaceEntries, self.interface_entries())
            .insert(Token::InterfaceAggregates, self.interface_aggregates())
            .insert(Token::BaseConstructor, self.base_constructor())
            .insert(Token::InterfaceConstructor, self.interface_constructor())
            .insert(Token::MemberImpl, self.member_impl())
            .insert(Token::MemberConstructor, self.member_constructor())
            .insert(Token::ObserverMembers, self.observer_members())
            .insert(Token::EventNotificationClass, self.event_notification_class()?)
            .insert(Token::NotificationClass, self.notification_class())
            .insert(Token::NotificationConstructor, self.notification_constructor())
            .insert(Token::NotificationEntries, self.notification_entries())
            .insert(Token::NotificationFunctions, self.notification_functions())
            .insert(Token::ConfigClass, self.config_class()?)
            .insert(
                Token::ConfigInterface,
                self.desc().config_interface().to_string(),
            );
        Ok(map)
    }
}
