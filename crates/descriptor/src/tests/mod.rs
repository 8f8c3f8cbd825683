use super::*;

fn spec(name: &str, sync: &[&str]) -> DescriptorSpec {
    DescriptorSpec {
        name: name.into(),
        sync_interfaces: sync.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn root_is_first_sync_interface() {
    let desc = PluginDescriptor::new(spec("Demo", &["IFoo", "IBar"])).unwrap();
    assert_eq!(desc.root(), Some("IFoo"));
    assert_eq!(desc.name_caps(), "DEMO");
}

#[test]
fn configuration_must_be_last() {
    let mut s = spec("Demo", &["IConfiguration", "IFoo"]);
    s.has_config = true;
    let err = PluginDescriptor::new(s).unwrap_err();
    assert_eq!(
        err,
        DescriptorError::ConfigurationNotLast {
            interface: "IConfiguration".into(),
            position: 0,
            len: 2,
        }
    );
}

#[test]
fn configuration_flag_must_match_sentinel() {
    let s = spec("Demo", &["IFoo", "IConfiguration"]);
    assert!(matches!(
        PluginDescriptor::new(s),
        Err(DescriptorError::ConfigurationNotDeclared(_))
    ));

    let mut s = spec("Demo", &["IFoo"]);
    s.has_config = true;
    assert!(matches!(
        PluginDescriptor::new(s),
        Err(DescriptorError::ConfigurationMissing(_))
    ));
}

#[test]
fn regular_interfaces_exclude_sentinel() {
    let mut s = spec("Demo", &["IFoo", "IConfiguration"]);
    s.has_config = true;
    let desc = PluginDescriptor::new(s).unwrap();
    assert_eq!(desc.regular_interfaces(), ["IFoo".to_string()]);
    assert_eq!(desc.sync_interfaces().len(), 2);
}

#[test]
fn out_of_process_requires_root() {
    let mut s = spec("Demo", &[]);
    s.out_of_process = true;
    assert!(matches!(
        PluginDescriptor::new(s),
        Err(DescriptorError::MissingRoot(_))
    ));

    let mut s = spec("Demo", &["IConfiguration"]);
    s.out_of_process = true;
    s.has_config = true;
    assert!(matches!(
        PluginDescriptor::new(s),
        Err(DescriptorError::MissingRoot(_))
    ));
}

#[test]
fn event_interfaces_need_a_pair() {
    let mut s = spec("Demo", &["IFoo"]);
    s.has_events = true;
    s.event_interfaces = vec!["JBar".into()];
    let err = PluginDescriptor::new(s).unwrap_err();
    assert_eq!(
        err,
        DescriptorError::UnpairedEventInterface {
            event: "JBar".into(),
            expected: "IBar".into(),
        }
    );
}

#[test]
fn event_names_must_carry_the_event_prefix() {
    let mut s = spec("Demo", &["IXyz"]);
    s.out_of_process = true;
    s.has_events = true;
    s.event_interfaces = vec!["Xyz".into()];
    let err = PluginDescriptor::new(s).unwrap_err();
    assert_eq!(
        err,
        DescriptorError::InvalidEventName {
            event: "Xyz".into(),
            expected: "JXyz".into(),
        }
    );
}

#[test]
fn out_of_process_alone_needs_no_sink() {
    let mut s = spec("Demo", &["IFoo"]);
    s.out_of_process = true;
    let desc = PluginDescriptor::new(s).unwrap();
    assert!(!desc.needs_notification_sink());
    assert!(!desc.handles_deactivation());

    let mut s = spec("Demo", &["IFoo"]);
    s.out_of_process = true;
    s.notifying_interfaces = vec!["IFoo".into()];
    let desc = PluginDescriptor::new(s).unwrap();
    assert!(desc.needs_notification_sink());
    assert!(desc.handles_deactivation());
}

#[test]
fn event_interfaces_need_events_enabled() {
    let mut s = spec("Demo", &["IFoo"]);
    s.event_interfaces = vec!["JFoo".into()];
    assert!(matches!(
        PluginDescriptor::new(s),
        Err(DescriptorError::EventsDisabled(_))
    ));
}

#[test]
fn notifying_must_be_subset() {
    let mut s = spec("Demo", &["IFoo"]);
    s.notifying_interfaces = vec!["IBar".into()];
    let err = PluginDescriptor::new(s).unwrap_err();
    assert!(err.to_string().contains("IBar"));
}

#[test]
fn notifying_follows_sync_order() {
    let mut s = spec("Demo", &["IFoo", "IBar", "IBaz"]);
    s.notifying_interfaces = vec!["IBaz".into(), "IFoo".into()];
    let desc = PluginDescriptor::new(s).unwrap();
    assert_eq!(
        desc.notifying_interfaces(),
        ["IFoo".to_string(), "IBaz".to_string()]
    );
}

#[test]
fn rejects_bad_identifiers_and_duplicates() {
    assert!(matches!(
        PluginDescriptor::new(spec("1Demo", &["IFoo"])),
        Err(DescriptorError::InvalidName(_))
    ));
    assert!(matches!(
        PluginDescriptor::new(spec("Demo", &["I Foo"])),
        Err(DescriptorError::InvalidInterfaceName(_))
    ));
    assert!(matches!(
        PluginDescriptor::new(spec("Demo", &["IFoo", "IFoo"])),
        Err(DescriptorError::DuplicateInterface(_))
    ));
}

#[test]
fn custom_sentinel_name() {
    let mut s = spec("Demo", &["IFoo", "ISettings"]);
    s.has_config = true;
    let conventions = Conventions {
        config_interface: "ISettings".into(),
    };
    let desc = PluginDescriptor::with_conventions(s, &conventions).unwrap();
    assert!(desc.is_config_interface("ISettings"));
    assert_eq!(desc.regular_interfaces().len(), 1);
}

#[test]
fn event_pairing_lookup() {
    let mut s = spec("Demo", &["IFoo", "IBar"]);
    s.has_events = true;
    s.event_interfaces = vec!["JBar".into()];
    let desc = PluginDescriptor::new(s).unwrap();
    assert_eq!(desc.event_for("IBar"), Some("JBar"));
    assert_eq!(desc.event_for("IFoo"), None);
    assert!(desc.needs_notification_sink());
}

#[test]
fn spec_deserialises_with_defaults() {
    let s: DescriptorSpec =
        serde_json::from_str(r#"{"name": "Demo", "sync_interfaces": ["IFoo"]}"#).unwrap();
    assert!(!s.out_of_process);
    assert!(s.event_interfaces.is_empty());
}

#[test]
fn misspelled_keys_are_rejected() {
    let err = serde_json::from_str::<DescriptorSpec>(
        r#"{"name": "Demo", "sync_interface": ["IFoo"]}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("sync_interface"));
}
