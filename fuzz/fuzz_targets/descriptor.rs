#![no_main]
use descriptor::PluginDescriptor;
use engine::{generate_all, planned_kinds, Context, GeneratorConfig};
use libfuzzer_sys::fuzz_target;
use loader::{parse_descriptor, DescriptorFormat, EmbeddedTemplates};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(spec) = parse_descriptor(s, DescriptorFormat::Yaml) else {
        return;
    };
    if let Ok(desc) = PluginDescriptor::new(spec) {
        let config = GeneratorConfig::default();
        let ctx = Context::new(&desc, &EmbeddedTemplates, &config);
        for (_, result) in generate_all(&planned_kinds(&desc), ctx) {
            let artifact = result.expect("valid descriptors always generate");
            assert!(!artifact.contents.contains("{{"));
        }
    }
});
