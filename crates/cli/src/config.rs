use anyhow::{bail, Context, Result};
use colored::*;
use descriptor::{Conventions, DEFAULT_CONFIG_INTERFACE};
use engine::{GeneratorConfig, TemplateIds, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::args::ConfigCmd;

#[cfg(windows)]
pub fn config_dir() -> PathBuf {
    std::env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("skelgen")
}

#[cfg(not(windows))]
pub fn config_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".config")
        .join("skelgen")
}

pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct TemplatesConfig {
    /// Override directory layered over the built-in templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Template id per role; lets a role point at a custom template.
    #[serde(default)]
    pub ids: TemplateIds,
}

fn default_config_interface() -> String {
    DEFAULT_CONFIG_INTERFACE.to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_config_interface")]
    pub config_interface: String,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            config_interface: default_config_interface(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_out_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn conventions(&self) -> Conventions {
        Conventions {
            config_interface: self.generation.config_interface.clone(),
        }
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            templates: self.templates.ids.clone(),
            max_depth: self.generation.max_depth,
        }
    }
}

pub fn load_config() -> Result<Config> {
    let path = config_file_path();
    if path.exists() {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).context("failed to parse config")
    } else {
        Ok(Config::default())
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let data = toml::to_string_pretty(config).context("failed to serialize config")?;
    fs::write(&path, data).with_context(|| format!("failed to write {}", path.display()))
}

pub fn handle_config(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Show => {
            let config = load_config()?;
            let path = config_file_path();
            let origin = if path.exists() { "" } else { " (defaults)" };
            println!("# {}{origin}", path.display());
            print!(
                "{}",
                toml::to_string_pretty(&config).context("failed to serialize config")?
            );
        }
        ConfigCmd::Path => println!("{}", config_file_path().display()),
        ConfigCmd::Init { force } => {
            let path = config_file_path();
            if path.exists() && !force {
                bail!(
                    "{} already exists; use --force to replace it",
                    path.display()
                );
            }
            save_config(&Config::default())?;
            println!(
                "{} Configuration written to {}",
                "✔".bright_green(),
                path.display().to_string().bright_white()
            );
        }
    }
    Ok(())
}
