use descriptor::PluginDescriptor;

use super::header::paired_events;
use super::observers::{self, impl_member};
use super::{ArtifactGenerator, Context};
use crate::error::GenerateError;
use crate::fragment::Fragment;
use crate::keywords::{KeywordMap, Replacement, Token};
use crate::ArtifactKind;

/// Interfaces queried from the root object after it has been created, in
/// acquisition order.
pub fn acquisition_chain(d: &PluginDescriptor) -> &[String] {
    d.regular_interfaces().get(1..).unwrap_or(&[])
}

/// Number of scopes the acquisition chain opens, and so has to close:
/// one per sync interface besides the root and the configuration sentinel.
pub fn closing_scopes(d: &PluginDescriptor) -> usize {
    acquisition_chain(d).len()
}

/// Generates the plugin source file.
pub struct SourceGenerator<'a> {
    ctx: Context<'a>,
}

impl<'a> SourceGenerator<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    fn desc(&self) -> &'a PluginDescriptor {
        self.ctx.descriptor
    }

    fn include(&self) -> Replacement {
        let d = self.desc();
        let mut f = Fragment::single(format!("#include \"{}.h\"", d.name()));
        if d.has_config() && d.out_of_process() {
            f.line(format!("#include <interfaces/{}.h>", d.config_interface()));
        }
        Replacement::Text(f)
    }

    fn event_includes(&self) -> Replacement {
        let d = self.desc();
        Replacement::or_omit(Fragment::from_lines(
            paired_events(d)
                .into_iter()
                .filter(|(sync, _)| !d.is_notifying(sync))
                .map(|(_, event)| format!("#include <interfaces/json/{event}.h>")),
        ))
    }

    fn variable_not_used(&self) -> Replacement {
        if self.desc().out_of_process() {
            Replacement::inline("")
        } else {
            Replacement::inline("VARIABLE_IS_NOT_USED ")
        }
    }

    fn lifecycle(&self, oop: &str, ip: &str) -> Result<Replacement, GenerateError> {
        if self.desc().out_of_process() {
            self.ctx.nested(oop)
        } else {
            self.ctx.nested(ip)
        }
    }

    fn configure_ip(&self) -> Replacement {
        if !self.desc().has_config() {
            return Replacement::Omit;
        }
        Replacement::Text(Fragment::from_lines([
            "Config config;",
            "config.FromString(service->ConfigLine());",
        ]))
    }

    fn event_register(&self) -> Replacement {
        Replacement::or_omit(Fragment::from_lines(
            self.desc()
                .event_interfaces()
                .iter()
                .map(|e| format!("Exchange::{e}::Register(*this, this);")),
        ))
    }

    fn event_unregister(&self) -> Replacement {
        Replacement::or_omit(Fragment::from_lines(
            self.desc()
                .event_interfaces()
                .iter()
                .map(|e| format!("Exchange::{e}::Unregister(*this);")),
        ))
    }

    fn sink(&self, call: &str) -> Replacement {
        if self.desc().needs_notification_sink() {
            Replacement::inline(format!("_service->{call}(&_notification);"))
        } else {
            Replacement::Omit
        }
    }

    fn root_interface(&self) -> Replacement {
        match self.desc().root() {
            Some(root) => Replacement::inline(root),
            None => Replacement::Omit,
        }
    }

    /// Registrations done as soon as `interface` has been acquired.
    fn attach(&self, f: &mut Fragment, interface: &str) {
        let d = self.desc();
        let member = impl_member(interface);
        if d.is_notifying(interface) {
            f.line(format!("{member}->Register(&_notification);"));
        }
        if let Some(event) = d.event_for(interface) {
            f.line(format!("Exchange::{event}::Register(*this, {member});"));
        }
    }

    fn nested_query(&self) -> Replacement {
        let d = self.desc();
        let Some(root) = d.root().filter(|_| d.out_of_process()) else {
            return Replacement::Omit;
        };
        let chain = acquisition_chain(d);
        let mut f = Fragment::new();
        let mut previous = root;
        for current in chain {
            self.attach(&mut f, previous);
            let member = impl_member(current);
            f.line(format!(
                "{member} = {}->QueryInterface<Exchange::{current}>();",
                impl_member(previous)
            ))
            .line(format!("if ({member} == nullptr) {{"))
            .indent()
            .line(format!(
                "message = _T(\"Couldn't create instance of {member}\");"
            ))
            .dedent()
            .line("} else {")
            .indent();
            previous = current;
        }
        self.attach(&mut f, previous);
        if d.has_config() {
            f.extend(self.configure_oop(root));
        }
        for _ in 0..closing_scopes(d) {
            f.dedent().line("}");
        }
        Replacement::or_omit(f)
    }

    fn configure_oop(&self, root: &str) -> Fragment {
        let d = self.desc();
        let config = d.config_interface();
        let mut f = Fragment::new();
        f.line(format!(
            "Exchange::{config}* configuration = {}->QueryInterface<Exchange::{config}>();",
            impl_member(root)
        ))
        .line("ASSERT(configuration != nullptr);")
        .line("if (configuration != nullptr) {")
        .indent()
        .line("if (configuration->Configure(service) != Core::ERROR_NONE) {")
        .indent()
        .line(format!(
            "message = _T(\"{} could not be configured.\");",
            d.name()
        ))
        .dedent()
        .line("}")
        .line("configuration->Release();")
        .dedent()
        .line("}");
        f
    }

    fn deinitialize(&self) -> Replacement {
        let d = self.desc();
        let Some(root) = d.root().filter(|_| d.out_of_process()) else {
            return Replacement::Omit;
        };
        let root_member = impl_member(root);
        let mut f = Fragment::new();
        f.line(format!("if ({root_member} != nullptr) {{")).indent();
        if d.is_notifying(root) {
            f.line(format!("{root_member}->Unregister(&_notification);"));
        }
        if let Some(event) = d.event_for(root) {
            f.line(format!("Exchange::{event}::Unregister(*this);"));
        }
        for current in acquisition_chain(d).iter().rev() {
            let member = impl_member(current);
            f.line(format!("if ({member} != nullptr) {{")).indent();
            if let Some(event) = d.event_for(current) {
                f.line(format!("Exchange::{event}::Unregister(*this);"));
            }
            if d.is_notifying(current) {
                f.line(format!("{member}->Unregister(&_notification);"));
            }
            f.line(format!("{member}->Release();"))
                .line(format!("{member} = nullptr;"))
                .dedent()
                .line("}");
        }
        f.blank()
            .line("RPC::IRemoteConnection* connection(_service->RemoteConnection(_connectionId));")
            .line(format!(
                "VARIABLE_IS_NOT_USED uint32_t result = {root_member}->Release();"
            ))
            .line(format!("{root_member} = nullptr;"))
            .line("ASSERT(result == Core::ERROR_DESTRUCTION_SUCCEEDED);")
            .blank()
            .line("// The process can disappear in the meantime...")
            .line("if (connection != nullptr) {")
            .indent()
            .line("// It did not disappear, so terminate it forcefully.")
            .line("connection->Terminate();")
            .line("connection->Release();")
            .dedent()
            .line("}")
            .dedent()
            .line("}");
        Replacement::Text(f)
    }

    fn plugin_method_impl(&self) -> Replacement {
        let d = self.desc();
        let name = d.name();
        let mut f = Fragment::new();
        f.line(format!("void {name}::{name}Method()"))
            .line("{")
            .line("}");
        if d.handles_deactivation() {
            f.blank();
            if d.out_of_process() {
                f.line(format!(
                    "void {name}::Deactivated(RPC::IRemoteConnection* connection)"
                ))
                .line("{")
                .indent()
                .line("if (connection->Id() == _connectionId) {")
                .indent()
                .line("ASSERT(_service != nullptr);")
                .line("Core::IWorkerPool::Instance().Submit(PluginHost::IShell::Job::Create(_service, PluginHost::IShell::DEACTIVATED, PluginHost::IShell::FAILURE));")
                .dedent()
                .line("}")
                .dedent()
                .line("}");
            } else {
                f.line(format!(
                    "void {name}::Deactivated(VARIABLE_IS_NOT_USED RPC::IRemoteConnection* connection)"
                ))
                .line("{")
                .line("}");
            }
        }
        Replacement::Text(f)
    }

    fn inherited_method_impl(&self) -> Replacement {
        let d = self.desc();
        if d.out_of_process() {
            return Replacement::Omit;
        }
        let name = d.name();
        let mut f = Fragment::new();
        for (n, i) in d.regular_interfaces().iter().enumerate() {
            if n > 0 {
                f.blank();
            }
            f.line(format!("// {i} methods"))
                .line(format!("uint32_t {name}::{i}Method1()"))
                .line("{")
                .indent()
                .line("return (Core::ERROR_NONE);")
                .dedent()
                .line("}");
            if d.is_notifying(i) {
                f.blank().extend(observers::definitions(i, Some(name)));
            }
        }
        Replacement::or_omit(f)
    }
}

impl ArtifactGenerator for SourceGenerator<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Source
    }

    fn context(&self) -> &Context<'_> {
        &self.ctx
    }

    fn template_id(&self) -> &str {
        &self.ctx.config.templates.plugin_source
    }

    fn keywords(&self) -> Result<KeywordMap, GenerateError> {
        let ids = &self.ctx.config.templates;
        let mut map = self.ctx.base_keywords();
        map.insert(Token::Include, self.include())
            .insert(Token::EventIncludes, self.event_includes())
            .insert(Token::VariableNotUsed, self.variable_not_used())
            .insert(
                Token::InitializeImplementation,
                self.lifecycle(&ids.initialize_oop, &ids.initialize_ip)?,
            )
            .insert(
                Token::DeinitializeImplementation,
                self.lifecycle(&ids.deinitialize_oop, &ids.deinitialize_ip)?,
            )
            .insert(Token::ConfigureIp, self.configure_ip())
            .insert(Token::EventRegister, self.event_register())
            .insert(Token::EventUnregister, self.event_unregister())
            .insert(Token::SinkRegister, self.sink("Register"))
            .insert(Token::SinkUnregister, self.sink("Unregister"))
            .insert(Token::RootInterface, self.root_interface())
            .insert(Token::NestedQuery, self.nested_query())
            .insert(Token::Deinitialize, self.deinitialize())
            .insert(Token::PluginMethodImpl, self.plugin_method_impl())
            .insert(Token::InheritedMethodImpl, self.inherited_method_impl());
        Ok(map)
    }
}
