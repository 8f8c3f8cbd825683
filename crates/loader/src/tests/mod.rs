use super::*;

#[test]
fn format_from_extension() {
    assert_eq!(
        DescriptorFormat::from_path(Path::new("a.YML")),
        Some(DescriptorFormat::Yaml)
    );
    assert_eq!(
        DescriptorFormat::from_path(Path::new("a.json")),
        Some(DescriptorFormat::Json)
    );
    assert_eq!(
        DescriptorFormat::from_path(Path::new("a.toml")),
        Some(DescriptorFormat::Toml)
    );
    assert_eq!(DescriptorFormat::from_path(Path::new("a.txt")), None);
}

#[test]
fn embedded_set_is_sorted_and_complete() {
    let ids = EmbeddedTemplates.ids();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    for id in [
        "plugin-header",
        "plugin-implementation",
        "plugin-source",
        "cmake",
        "plugin-json",
        "plugin-conf",
    ] {
        assert!(EmbeddedTemplates.read(id).is_ok(), "missing {id}");
    }
}

#[test]
fn embedded_unknown_id_is_not_found() {
    let err = EmbeddedTemplates.read("nope").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "template 'nope' not found");
}

#[test]
fn memory_store_reads_are_idempotent() {
    let store = MemoryTemplateStore::new().with("a", "alpha");
    assert_eq!(store.read("a").unwrap(), store.read("a").unwrap());
    assert_eq!(store.ids(), vec!["a".to_string()]);
}

#[test]
fn parses_toml_descriptor() {
    let spec = parse_descriptor(
        r#"
name = "Volume"
sync_interfaces = ["IVolume", "IConfiguration"]
has_config = true
"#,
        DescriptorFormat::Toml,
    )
    .unwrap();
    assert_eq!(spec.name, "Volume");
    assert!(spec.has_config);
}
