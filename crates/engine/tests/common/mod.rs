#![allow(dead_code)]

use descriptor::{DescriptorSpec, PluginDescriptor};
use engine::{generate, ArtifactKind, Context, GeneratorConfig};
use loader::EmbeddedTemplates;

pub fn spec(sync: &[&str]) -> DescriptorSpec {
    DescriptorSpec {
        name: "Demo".into(),
        sync_interfaces: sync.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

pub fn descriptor(spec: DescriptorSpec) -> PluginDescriptor {
    PluginDescriptor::new(spec).expect("valid descriptor")
}

pub fn render(desc: &PluginDescriptor, kind: ArtifactKind) -> String {
    let config = GeneratorConfig::default();
    let ctx = Context::new(desc, &EmbeddedTemplates, &config);
    generate(kind, ctx).expect("generation succeeds").contents
}

/// No leftover placeholders or markers, and braces that pair up.
pub fn assert_clean(text: &str) {
    assert!(!text.contains("{{"), "leftover placeholder in:\n{text}");
    assert!(!text.contains("~INDENT"), "leftover marker in:\n{text}");
    assert!(text.ends_with('\n'));
    let mut depth = 0i64;
    for c in text.chars() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
        assert!(depth >= 0, "unbalanced braces in:\n{text}");
    }
    assert_eq!(depth, 0, "unbalanced braces in:\n{text}");
}

/// A spread of descriptors covering every mode and flag combination.
pub fn variety() -> Vec<PluginDescriptor> {
    let mut out = Vec::new();
    for oop in [false, true] {
        for config in [false, true] {
            for events in [false, true] {
                let mut s = spec(&["IFoo", "IBar", "IBaz"]);
                s.out_of_process = oop;
                s.notifying_interfaces = vec!["IBar".into()];
                if config {
                    s.sync_interfaces.push("IConfiguration".into());
                    s.has_config = true;
                }
                if events {
                    s.has_events = true;
                    s.event_interfaces = vec!["JFoo".into(), "JBar".into()];
                }
                out.push(descriptor(s));
            }
        }
    }
    out.push(descriptor(spec(&[])));
    out.push(descriptor(spec(&["IFoo"])));
    out
}
