//! Snippets for the observer lists kept per notifying interface.

use crate::fragment::Fragment;

pub(crate) const ADMIN_LOCK: &str = "_adminLock";

pub(crate) fn list_member(interface: &str) -> String {
    format!("_notifications{interface}")
}

pub(crate) fn impl_member(interface: &str) -> String {
    format!("_impl{interface}")
}

fn scoped_lock() -> String {
    format!("Core::SafeSyncType<Core::CriticalSection> scopedLock({ADMIN_LOCK});")
}

/// Body of `Register`: rejects duplicates, takes a reference, appends.
pub(crate) fn register_body(interface: &str) -> Fragment {
    let list = list_member(interface);
    let mut f = Fragment::new();
    f.line("ASSERT(notification != nullptr);")
        .line(scoped_lock())
        .blank()
        .line(format!(
            "auto item = std::find({list}.begin(), {list}.end(), notification);"
        ))
        .line(format!("ASSERT(item == {list}.end());"))
        .blank()
        .line(format!("if (item == {list}.end()) {{"))
        .indent()
        .line("notification->AddRef();")
        .line(format!("{list}.push_back(notification);"))
        .dedent()
        .line("}");
    f
}

/// Body of `Unregister`: requires presence, drops the reference, removes.
pub(crate) fn unregister_body(interface: &str) -> Fragment {
    let list = list_member(interface);
    let mut f = Fragment::new();
    f.line("ASSERT(notification != nullptr);")
        .line(scoped_lock())
        .blank()
        .line(format!(
            "auto item = std::find({list}.begin(), {list}.end(), notification);"
        ))
        .line(format!("ASSERT(item != {list}.end());"))
        .blank()
        .line(format!("if (item != {list}.end()) {{"))
        .indent()
        .line("(*item)->Release();")
        .line(format!("{list}.erase(item);"))
        .dedent()
        .line("}");
    f
}

fn parameter(interface: &str) -> String {
    format!("Exchange::{interface}::INotification* notification")
}

/// `Register`/`Unregister` declarations for a class body.
pub(crate) fn declarations(interface: &str) -> Fragment {
    let param = parameter(interface);
    Fragment::from_lines([
        format!("uint32_t Register({param}) override;"),
        format!("uint32_t Unregister({param}) override;"),
    ])
}

/// `Register`/`Unregister` definitions. `owner` qualifies the names for
/// out-of-class definitions; inline definitions pass `None`.
pub(crate) fn definitions(interface: &str, owner: Option<&str>) -> Fragment {
    let param = parameter(interface);
    let (prefix, suffix) = match owner {
        Some(owner) => (format!("{owner}::"), ""),
        None => (String::new(), " override"),
    };
    let mut f = Fragment::new();
    for (name, body) in [
        ("Register", register_body(interface)),
        ("Unregister", unregister_body(interface)),
    ] {
        if name == "Unregister" {
            f.blank();
        }
        f.line(format!("uint32_t {prefix}{name}({param}){suffix}"))
            .line("{")
            .nest(body)
            .indent()
            .line("return (Core::ERROR_NONE);")
            .dedent()
            .line("}");
    }
    f
}

/// Fan-out helper calling every registered observer.
pub(crate) fn notify_method(interface: &str) -> Fragment {
    let list = list_member(interface);
    let mut f = Fragment::new();
    f.line(format!("void Notify{interface}()"))
        .line("{")
        .indent()
        .line(scoped_lock())
        .line(format!("for (auto* notification : {list}) {{"))
        .indent()
        .line(format!("notification->{interface}Notification();"))
        .dedent()
        .line("}")
        .dedent()
        .line("}");
    f
}

/// Lock plus one observer list per interface.
pub(crate) fn members(interfaces: &[String]) -> Fragment {
    let mut f = Fragment::single(format!("Core::CriticalSection {ADMIN_LOCK};"));
    for i in interfaces {
        f.line(format!(
            "std::vector<Exchange::{i}::INotification*> {};",
            list_member(i)
        ));
    }
    f
}

/// Initializer-list entries matching [`members`].
pub(crate) fn member_initializers(interfaces: &[String]) -> Vec<String> {
    let mut lines = vec![format!(", {ADMIN_LOCK}()")];
    lines.extend(interfaces.iter().map(|i| format!(", {}()", list_member(i))));
    lines
}
