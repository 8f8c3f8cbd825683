use criterion::{black_box, criterion_group, criterion_main, Criterion};
use descriptor::{DescriptorSpec, PluginDescriptor};
use engine::{expand, generate_all, planned_kinds, Context, GeneratorConfig, KeywordMap, Token};
use loader::{EmbeddedTemplates, TemplateStore};
use std::time::Duration;

struct SkeletonBench {
    name: &'static str,
    out_of_process: bool,
    interfaces: usize,
}

const SKELETON_BENCHES: &[SkeletonBench] = &[
    SkeletonBench {
        name: "skeleton_in_process",
        out_of_process: false,
        interfaces: 1,
    },
    SkeletonBench {
        name: "skeleton_out_of_process",
        out_of_process: true,
        interfaces: 1,
    },
    SkeletonBench {
        name: "skeleton_out_of_process_wide",
        out_of_process: true,
        interfaces: 12,
    },
];

fn descriptor(bench: &SkeletonBench) -> PluginDescriptor {
    let mut sync: Vec<String> = (0..bench.interfaces).map(|i| format!("IBench{i}")).collect();
    let events: Vec<String> = (0..bench.interfaces)
        .step_by(2)
        .map(|i| format!("JBench{i}"))
        .collect();
    let notifying: Vec<String> = sync.iter().skip(1).step_by(3).cloned().collect();
    sync.push("IConfiguration".into());
    PluginDescriptor::new(DescriptorSpec {
        name: "Bench".into(),
        sync_interfaces: sync,
        has_events: !events.is_empty(),
        event_interfaces: events,
        notifying_interfaces: notifying,
        out_of_process: bench.out_of_process,
        has_config: true,
    })
    .expect("valid bench descriptor")
}

fn bench_skeletons(c: &mut Criterion) {
    let store = EmbeddedTemplates;
    let config = GeneratorConfig::default();
    for bench in SKELETON_BENCHES {
        let desc = descriptor(bench);
        let kinds = planned_kinds(&desc);
        c.bench_function(bench.name, |b| {
            b.iter(|| {
                let ctx = Context::new(&desc, &store, &config);
                generate_all(black_box(&kinds), ctx)
            })
        });
    }
}

fn bench_expand(c: &mut Criterion) {
    let template = EmbeddedTemplates
        .read("plugin-source")
        .expect("built-in template");
    let mut keywords = KeywordMap::new();
    for token in Token::ALL {
        keywords.insert(*token, token.name().to_lowercase());
    }
    c.bench_function("expand_plugin_source", |b| {
        b.iter(|| expand(black_box(&template), black_box(&keywords), 16))
    });
}

fn configure() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = configure();
    targets = bench_skeletons, bench_expand
}
criterion_main!(benches);
