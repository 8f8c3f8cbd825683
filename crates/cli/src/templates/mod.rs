use anyhow::{Context, Result};
use colored::*;
use loader::{export_templates, DirTemplateStore, TemplateStore};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::args::TemplatesCmd;
use crate::config::load_config;
use crate::template_store;

fn overrides_dir(flag: Option<PathBuf>) -> Result<Option<PathBuf>> {
    match flag {
        Some(dir) => Ok(Some(dir)),
        None => Ok(load_config()?.templates.dir),
    }
}

pub fn handle_templates(cmd: TemplatesCmd) -> Result<()> {
    match cmd {
        TemplatesCmd::List { templates } => list_templates(overrides_dir(templates)?),
        TemplatesCmd::Show { id, templates } => {
            let dir = overrides_dir(templates)?;
            let store = template_store(dir.as_deref())?;
            let text = store.read(&id)?;
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        TemplatesCmd::Export {
            dir,
            force,
            templates,
        } => {
            let overrides = overrides_dir(templates)?;
            let store = template_store(overrides.as_deref())?;
            let total = store.ids().len();
            let written = export_templates(store.as_ref(), &dir, force)
                .with_context(|| format!("failed to export templates to {}", dir.display()))?;
            println!(
                "{} Exported {} of {} templates to {}",
                "✔".bright_green(),
                written.len().to_string().bright_white().bold(),
                total,
                dir.display().to_string().bright_cyan()
            );
            if written.len() < total {
                println!(
                    "  {} {} existing files kept; use --force to replace them",
                    "•".bright_yellow(),
                    total - written.len()
                );
            }
            Ok(())
        }
    }
}

fn list_templates(overrides: Option<PathBuf>) -> Result<()> {
    let overridden: HashSet<String> = overrides
        .as_ref()
        .map(|dir| DirTemplateStore::new(dir).ids().into_iter().collect())
        .unwrap_or_default();
    let store = template_store(overrides.as_deref())?;
    let ids = store.ids();
    println!("{}", "Templates:".bright_white().bold());
    for id in &ids {
        if overridden.contains(id) {
            println!("  {} {} {}", "•".bright_cyan(), id, "(override)".bright_yellow());
        } else {
            println!("  {} {}", "•".bright_cyan(), id);
        }
    }
    println!();
    println!(
        "{} templates, {} overridden",
        ids.len().to_string().bright_white(),
        overridden.len().to_string().bright_white()
    );
    Ok(())
}
