//! The closed catalogue of placeholder tokens and the per-artifact keyword map.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::fragment::Fragment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A placeholder templates may contain, written as `{{NAME}}`.
pub enum Token {
    PluginName,
    PluginNameCaps,
    // header
    InterfaceIncludes,
    ConfigurationInclude,
    InheritedClasses,
    ImplementationInheritedClasses,
    InheritedMethods,
    NotifyMethods,
    PluginMethods,
    InterfaceEntries,
    InterfaceAggregates,
    BaseConstructor,
    InterfaceConstructor,
    MemberImpl,
    MemberConstructor,
    ObserverMembers,
    EventNotificationClass,
    NotificationClass,
    NotificationConstructor,
    NotificationEntries,
    NotificationFunctions,
    ConfigClass,
    ConfigInterface,
    // source
    Include,
    EventIncludes,
    VariableNotUsed,
    InitializeImplementation,
    DeinitializeImplementation,
    ConfigureIp,
    EventRegister,
    EventUnregister,
    SinkRegister,
    SinkUnregister,
    RootInterface,
    NestedQuery,
    Deinitialize,
    PluginMethodImpl,
    InheritedMethodImpl,
    // build descriptor
    SetMode,
    SourceFiles,
    // schema
    Cppref,
    JsonConfiguration,
    JsonInterface,
    JsonInfo,
    // deployment config
    PluginStartmode,
    ConfigurationObject,
    OopRoot,
    Config,
    // module files
    ModulePluginName,
}

impl Token {
    pub const ALL: &'static [Token] = &[
        Token::PluginName,
        Token::PluginNameCaps,
        Token::InterfaceIncludes,
        Token::ConfigurationInclude,
        Token::InheritedClasses,
        Token::ImplementationInheritedClasses,
        Token::InheritedMethods,
        Token::NotifyMethods,
        Token::PluginMethods,
        Token::InterfaceEntries,
        Token::InterfaceAggregates,
        Token::BaseConstructor,
        Token::InterfaceConstructor,
        Token::MemberImpl,
        Token::MemberConstructor,
        Token::ObserverMembers,
        Token::EventNotificationClass,
        Token::NotificationClass,
        Token::NotificationConstructor,
        Token::NotificationEntries,
        Token::NotificationFunctions,
        Token::ConfigClass,
        Token::ConfigInterface,
        Token::Include,
        Token::EventIncludes,
        Token::VariableNotUsed,
        Token::InitializeImplementation,
        Token::DeinitializeImplementation,
        Token::ConfigureIp,
        Token::EventRegister,
        Token::EventUnregister,
        Token::SinkRegister,
        Token::SinkUnregister,
        Token::RootInterface,
        Token::NestedQuery,
        Token::Deinitialize,
        Token::PluginMethodImpl,
        Token::InheritedMethodImpl,
        Token::SetMode,
        Token::SourceFiles,
        Token::Cppref,
        Token::JsonConfiguration,
        Token::JsonInterface,
        Token::JsonInfo,
        Token::PluginStartmode,
        Token::ConfigurationObject,
        Token::OopRoot,
        Token::Config,
        Token::ModulePluginName,
    ];

    /// Name as written between the braces.
    pub fn name(self) -> &'static str {
        match self {
            Token::PluginName => "PLUGIN_NAME",
            Token::PluginNameCaps => "PLUGIN_NAME_CAPS",
            Token::InterfaceIncludes => "INTERFACE_INCLUDES",
            Token::ConfigurationInclude => "CONFIGURATION_INCLUDE",
            Token::InheritedClasses => "INHERITED_CLASSES",
            Token::ImplementationInheritedClasses => "IMPLEMENTATION_INHERITED_CLASSES",
            Token::InheritedMethods => "INHERITED_METHODS",
            Token::NotifyMethods => "NOTIFY_METHODS",
            Token::PluginMethods => "PLUGIN_METHODS",
            Token::InterfaceEntries => "INTERFACE_ENTRIES",
            Token::InterfaceAggregates => "INTERFACE_AGGREGATES",
            Token::BaseConstructor => "BASE_CONSTRUCTOR",
            Token::InterfaceConstructor => "INTERFACE_CONSTRUCTOR",
            Token::MemberImpl => "MEMBER_IMPL",
            Token::MemberConstructor => "MEMBER_CONSTRUCTOR",
            Token::ObserverMembers => "OBSERVER_MEMBERS",
            Token::EventNotificationClass => "EVENT_NOTIFICATION_CLASS",
            Token::NotificationClass => "NOTIFICATION_CLASS",
            Token::NotificationConstructor => "NOTIFICATION_CONSTRUCTOR",
            Token::NotificationEntries => "NOTIFICATION_ENTRIES",
            Token::NotificationFunctions => "NOTIFICATION_FUNCTIONS",
            Token::ConfigClass => "CONFIG_CLASS",
            Token::ConfigInterface => "CONFIG_INTERFACE",
            Token::Include => "INCLUDE",
            Token::EventIncludes => "EVENT_INCLUDES",
            Token::VariableNotUsed => "VARIABLE_NOT_USED",
            Token::InitializeImplementation => "INITIALIZE_IMPLEMENTATION",
            Token::DeinitializeImplementation => "DEINITIALIZE_IMPLEMENTATION",
            Token::ConfigureIp => "CONFIGURE_IP",
            Token::EventRegister => "EVENT_REGISTER",
            Token::EventUnregister => "EVENT_UNREGISTER",
            Token::SinkRegister => "SINK_REGISTER",
            Token::SinkUnregister => "SINK_UNREGISTER",
            Token::RootInterface => "ROOT_INTERFACE",
            Token::NestedQuery => "NESTED_QUERY",
            Token::Deinitialize => "DEINITIALIZE",
            Token::PluginMethodImpl => "PLUGIN_METHOD_IMPL",
            Token::InheritedMethodImpl => "INHERITED_METHOD_IMPL",
            Token::SetMode => "SET_MODE",
            Token::SourceFiles => "SOURCE_FILES",
            Token::Cppref => "CPPREF",
            Token::JsonConfiguration => "JSON_CONFIGURATION",
            Token::JsonInterface => "JSON_INTERFACE",
            Token::JsonInfo => "JSON_INFO",
            Token::PluginStartmode => "PLUGIN_STARTMODE",
            Token::ConfigurationObject => "CONFIGURATION_OBJECT",
            Token::OopRoot => "OOP_ROOT",
            Token::Config => "CONFIG",
            Token::ModulePluginName => "MODULE_PLUGIN_NAME",
        }
    }

    /// The token as it appears in template text.
    pub fn placeholder(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Token {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| format!("unknown token '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a placeholder turns into.
pub enum Replacement {
    Text(Fragment),
    /// Drop every template line that mentions the token.
    Omit,
}

impl Replacement {
    /// `Omit` for a fragment without lines, `Text` otherwise.
    pub fn or_omit(fragment: Fragment) -> Self {
        if fragment.is_empty() {
            Replacement::Omit
        } else {
            Replacement::Text(fragment)
        }
    }

    /// Inline text that is allowed to be empty.
    pub fn inline(text: impl Into<String>) -> Self {
        Replacement::Text(Fragment::single(text))
    }

    pub fn is_omit(&self) -> bool {
        matches!(self, Replacement::Omit)
    }
}

impl From<Fragment> for Replacement {
    fn from(f: Fragment) -> Self {
        Replacement::Text(f)
    }
}

impl From<String> for Replacement {
    fn from(s: String) -> Self {
        Replacement::inline(s)
    }
}

impl From<&str> for Replacement {
    fn from(s: &str) -> Self {
        Replacement::inline(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Token values for one artifact. Built fresh for every generation.
pub struct KeywordMap {
    entries: BTreeMap<Token, Replacement>,
}

impl KeywordMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: Token, value: impl Into<Replacement>) -> &mut Self {
        self.entries.insert(token, value.into());
        self
    }

    pub fn get(&self, token: Token) -> Option<&Replacement> {
        self.entries.get(&token)
    }

    /// Looks a value up by the name written in the template.
    pub fn lookup(&self, name: &str) -> Option<&Replacement> {
        name.parse::<Token>().ok().and_then(|t| self.get(t))
    }

    pub fn contains(&self, token: Token) -> bool {
        self.entries.contains_key(&token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Token, &Replacement)> {
        self.entries.iter().map(|(t, r)| (*t, r))
    }
}
