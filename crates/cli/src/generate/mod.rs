use anyhow::{bail, Result};
use colored::*;
use descriptor::PluginDescriptor;
use engine::{generate_all, planned_kinds, ArtifactKind, Context};
use loader::load_plugin_descriptor;
use reporters::{failed_entry, write_artifact, GenerationReport, Status, WriteOptions};
use tracing::{debug, info, warn};

use crate::args::{GenerateArgs, ValidateArgs};
use crate::config::load_config;
use crate::output::{self, Format};
use crate::{init_logging, template_store, ui};

/// Artifacts to generate: the whole skeleton, or the requested subset of it.
pub fn select_kinds(desc: &PluginDescriptor, only: &[ArtifactKind]) -> Vec<ArtifactKind> {
    let planned = planned_kinds(desc);
    if only.is_empty() {
        return planned;
    }
    for kind in only {
        if !planned.contains(kind) {
            warn!(%kind, plugin = desc.name(), "Artifact does not apply to this plugin, ignored");
        }
    }
    planned.into_iter().filter(|k| only.contains(k)).collect()
}

pub fn run_generate(args: GenerateArgs) -> Result<()> {
    init_logging(args.debug, args.quiet);
    if args.format == Format::Text && !args.quiet {
        ui::print_header();
    }

    let config = load_config()?;
    info!(descriptor = %args.descriptor.display(), "Generation started");
    let desc = load_plugin_descriptor(&args.descriptor, &config.conventions())?;

    let overrides = args.templates.as_deref().or(config.templates.dir.as_deref());
    let store = template_store(overrides)?;
    let gen_config = config.generator_config();
    let ctx = Context::new(&desc, store.as_ref(), &gen_config);

    let kinds = select_kinds(&desc, &args.only);
    if kinds.is_empty() {
        bail!("nothing to generate for {}", desc.name());
    }
    debug!(kinds = ?kinds, "Artifacts selected");

    let out_dir = args.out.clone().unwrap_or_else(|| config.output.dir.clone());
    let opts = WriteOptions {
        force: args.force,
        dry_run: args.dry_run,
    };
    let artifacts = generate_all(&kinds, ctx)
        .into_iter()
        .map(|(kind, result)| match result {
            Ok(artifact) => write_artifact(&artifact, &out_dir, opts),
            Err(e) => failed_entry(kind, kind.file_name(&desc), &out_dir, e.to_string()),
        })
        .collect();

    let report = GenerationReport {
        plugin: desc.name().to_string(),
        out_dir,
        dry_run: args.dry_run,
        artifacts,
    };
    output::print_report(&report, args.format)?;
    info!(
        plugin = desc.name(),
        written = report.count(Status::Written) + report.count(Status::Overwritten),
        skipped = report.count(Status::Skipped),
        failed = report.count(Status::Failed),
        "Generation completed"
    );
    if report.has_failures() {
        bail!("{} artifact(s) failed", report.count(Status::Failed));
    }
    Ok(())
}

pub fn run_validate(args: ValidateArgs) -> Result<()> {
    init_logging(args.debug, args.quiet);
    let config = load_config()?;
    let desc = load_plugin_descriptor(&args.descriptor, &config.conventions())?;

    let list = |items: &[String]| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    println!(
        "{} {} is valid",
        "✔".bright_green(),
        desc.name().bright_white().bold()
    );
    println!(
        "    Mode:        {}",
        if desc.out_of_process() {
            "out-of-process"
        } else {
            "in-process"
        }
    );
    println!("    Root:        {}", desc.root().unwrap_or("-"));
    println!("    Interfaces:  {}", list(desc.sync_interfaces()));
    println!("    Events:      {}", list(desc.event_interfaces()));
    println!("    Notifying:   {}", list(desc.notifying_interfaces()));
    println!(
        "    Config:      {}",
        if desc.has_config() {
            desc.config_interface()
        } else {
            "-"
        }
    );
    let files: Vec<String> = planned_kinds(&desc)
        .into_iter()
        .map(|k| k.file_name(&desc))
        .collect();
    println!("    Artifacts:   {}", files.join(", "));
    Ok(())
}
