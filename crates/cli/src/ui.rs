//! Banner shown before a generation run.

pub fn print_header() {
    let version = env!("CARGO_PKG_VERSION");
    // Avoid panics when the version exceeds the expected width
    let spaces = " ".repeat(24usize.saturating_sub(version.len()));
    eprintln!(
        r#"
    ╭──────────────────────────────────────╮
    │                                      │
    │     SKELGEN  PLUGIN  SKELETONS       │
    │                                      │
    │     Thunder plugin generator         │
    │     Version: {version}{spaces}│
    │                                      │
    ╰──────────────────────────────────────╯
"#
    );
}
