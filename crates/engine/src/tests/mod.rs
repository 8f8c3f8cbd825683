use super::*;

fn map(entries: Vec<(Token, Replacement)>) -> KeywordMap {
    let mut m = KeywordMap::new();
    for (t, r) in entries {
        m.insert(t, r);
    }
    m
}

#[test]
fn substitutes_inline_tokens() {
    let m = map(vec![(Token::PluginName, "Demo".into())]);
    let out = expand("class {{PLUGIN_NAME}} : public Base {", &m, 4).unwrap();
    assert_eq!(out, "class Demo : public Base {\n");
}

#[test]
fn omit_drops_the_whole_line() {
    let m = map(vec![
        (Token::PluginName, "Demo".into()),
        (Token::Include, Replacement::Omit),
    ]);
    let out = expand("a\n  {{PLUGIN_NAME}} {{INCLUDE}}\nb", &m, 4).unwrap();
    assert_eq!(out, "a\nb\n");
}

#[test]
fn empty_text_keeps_a_blank_line() {
    let m = map(vec![(Token::Include, Replacement::Text(Fragment::new()))]);
    let out = expand("a\n    {{INCLUDE}}\nb", &m, 4).unwrap();
    assert_eq!(out, "a\n\nb\n");
}

#[test]
fn multi_line_values_follow_the_line_indentation() {
    let mut f = Fragment::single("if (x) {");
    f.indent().line("y();").dedent().line("}");
    let m = map(vec![(Token::NestedQuery, f.into())]);
    let out = expand("        {{NESTED_QUERY}}", &m, 4).unwrap();
    assert_eq!(out, "        if (x) {\n            y();\n        }\n");
}

#[test]
fn inline_multi_line_value_keeps_surrounding_text() {
    let m = map(vec![(
        Token::SourceFiles,
        Fragment::from_lines(["a.cpp", "b.cpp"]).into(),
    )]);
    let out = expand("    add({{SOURCE_FILES}})", &m, 4).unwrap();
    assert_eq!(out, "    add(a.cpp\n    b.cpp)\n");
}

#[test]
fn template_markers_become_indentation() {
    let text = "a\n~INDENT_INCREASE~\nb\n~INDENT_INCREASE~\nc\n~INDENT_DECREASE~\n~INDENT_DECREASE~\nd";
    let out = expand(text, &KeywordMap::new(), 4).unwrap();
    assert_eq!(out, "a\n    b\n        c\nd\n");
    assert!(!out.contains("~INDENT"));
}

#[test]
fn indentation_never_goes_negative() {
    let mut f = Fragment::new();
    f.dedent().dedent().line("x").indent().line("y");
    assert_eq!(f.render(INDENT_UNIT), vec!["x", "    y"]);
}

#[test]
fn values_are_expanded_recursively() {
    let m = map(vec![
        (Token::PluginName, "Demo".into()),
        (
            Token::Include,
            Fragment::from_lines(["#include \"{{PLUGIN_NAME}}.h\"", "// {{PLUGIN_NAME}}"]).into(),
        ),
    ]);
    let out = expand("{{INCLUDE}}", &m, 4).unwrap();
    assert_eq!(out, "#include \"Demo.h\"\n// Demo\n");
}

#[test]
fn nested_omit_is_honoured() {
    let m = map(vec![
        (
            Token::InitializeImplementation,
            Fragment::from_lines(["{", "    {{CONFIGURE_IP}}", "}"]).into(),
        ),
        (Token::ConfigureIp, Replacement::Omit),
    ]);
    let out = expand("    {{INITIALIZE_IMPLEMENTATION}}", &m, 4).unwrap();
    assert_eq!(out, "    {\n    }\n");
}

#[test]
fn self_reference_is_a_cycle() {
    let m = map(vec![(Token::Include, "x {{INCLUDE}}".into())]);
    let err = expand("{{INCLUDE}}", &m, 16).unwrap_err();
    assert!(matches!(err, GenerateError::Cycle { depth: 16 }));
}

#[test]
fn unknown_placeholder_is_reported() {
    let err = expand("a {{NOT_A_TOKEN}}", &KeywordMap::new(), 4).unwrap_err();
    match err {
        GenerateError::UnresolvedPlaceholder { token } => assert_eq!(token, "NOT_A_TOKEN"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn known_token_without_value_is_reported() {
    let err = expand("{{PLUGIN_NAME}}", &KeywordMap::new(), 4).unwrap_err();
    assert!(err.to_string().contains("{{PLUGIN_NAME}}"));
}

#[test]
fn output_is_trimmed_and_newline_terminated() {
    let m = map(vec![(Token::PluginName, "Demo   ".into())]);
    let out = expand("x {{PLUGIN_NAME}}\t", &m, 4).unwrap();
    assert_eq!(out, "x Demo\n");
}

#[test]
fn fragment_parse_keeps_text_and_reads_markers() {
    let f = Fragment::parse("a\n  ~INDENT_INCREASE~\nb");
    assert_eq!(
        f.pieces(),
        [
            Piece::Line("a".into()),
            Piece::IndentIncrease,
            Piece::Line("b".into())
        ]
    );
}

#[test]
fn markers_alone_are_empty() {
    let mut f = Fragment::new();
    f.indent().dedent();
    assert!(f.is_empty());
    assert!(Replacement::or_omit(f).is_omit());
}

#[test]
fn token_names_round_trip() {
    for t in Token::ALL {
        assert_eq!(t.name().parse::<Token>().unwrap(), *t);
        assert_eq!(t.placeholder(), format!("{{{{{}}}}}", t.name()));
    }
    assert!("nope".parse::<Token>().is_err());
}

#[test]
fn artifact_kind_parses_loosely() {
    assert_eq!(
        "header_implementation".parse::<ArtifactKind>().unwrap(),
        ArtifactKind::HeaderImplementation
    );
    assert_eq!("Schema".parse::<ArtifactKind>().unwrap(), ArtifactKind::Schema);
    assert!("makefile".parse::<ArtifactKind>().is_err());
}

#[test]
fn placeholders_are_listed_in_order() {
    assert_eq!(
        placeholders("{{A}} x {{B_2}} {{A}}"),
        vec!["A".to_string(), "B_2".into(), "A".into()]
    );
}
