//! Naming convention linking a synchronous interface to its event
//! (JSON-RPC dispatch) counterpart: `IFoo` pairs with `JFoo`.

/// Leading letter of synchronous interface names.
pub const SYNC_PREFIX: char = 'I';
/// Leading letter of event interface names.
pub const EVENT_PREFIX: char = 'J';

/// Derives the event interface name paired with `sync`.
///
/// # Example
/// ```
/// use descriptor::naming::event_name_for;
/// assert_eq!(event_name_for("IVolume"), "JVolume");
/// ```
pub fn event_name_for(sync: &str) -> String {
    let stem = sync.strip_prefix(SYNC_PREFIX).unwrap_or(sync);
    format!("{EVENT_PREFIX}{stem}")
}

/// Derives the synchronous interface name an event interface belongs to.
///
/// # Example
/// ```
/// use descriptor::naming::sync_name_for;
/// assert_eq!(sync_name_for("JVolume"), "IVolume");
/// ```
pub fn sync_name_for(event: &str) -> String {
    let stem = event.strip_prefix(EVENT_PREFIX).unwrap_or(event);
    format!("{SYNC_PREFIX}{stem}")
}

/// Whether `s` can be used verbatim as a C++ identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
