#![no_main]
use engine::{expand, KeywordMap, Token};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut keywords = KeywordMap::new();
        keywords
            .insert(Token::PluginName, "Fuzz")
            .insert(Token::Include, "#include \"{{PLUGIN_NAME}}.h\"\n~INDENT_INCREASE~\nx");
        if let Ok(out) = expand(s, &keywords, 8) {
            assert!(out.is_empty() || out.ends_with('\n'));
        }
    }
});
