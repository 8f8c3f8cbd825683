use clap::{Args as ClapArgs, Parser, Subcommand};
use engine::ArtifactKind;
use std::path::PathBuf;

use crate::output::Format;

fn parse_kind(s: &str) -> Result<ArtifactKind, String> {
    s.parse()
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "skelgen - generate Thunder plugin skeletons from a short descriptor",
    long_about = "skelgen turns a plugin descriptor (name, interfaces, execution mode) into the \
source files of a Thunder plugin: class header, implementation, build file, JSON metadata \
and configuration template.

Examples:
  skelgen generate plugin.yaml --out MyPlugin   # Write the skeleton
  skelgen generate plugin.yaml --dry-run        # Show what would be written
  skelgen validate plugin.yaml                  # Check a descriptor
  skelgen templates export ./templates          # Copy the built-in templates",
    subcommand_required = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Show version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plugin skeleton from a descriptor file
    Generate(GenerateArgs),
    /// Check a descriptor file without generating anything
    Validate(ValidateArgs),
    /// Inspect and export the templates used for generation
    #[command(subcommand, alias = "template")]
    Templates(TemplatesCmd),
    /// Show or initialise the configuration file
    #[command(subcommand)]
    Config(ConfigCmd),
}

#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// Descriptor file (.yaml, .yml, .json or .toml)
    pub descriptor: PathBuf,
    /// Directory the artifacts are written to
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Directory with template overrides
    #[arg(long)]
    pub templates: Option<PathBuf>,
    /// Output format for the run summary
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Only generate these artifacts (comma separated or repeated)
    #[arg(long, value_parser = parse_kind, value_delimiter = ',')]
    pub only: Vec<ArtifactKind>,
    /// Report what would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,
    /// Overwrite existing files whose contents differ
    #[arg(long)]
    pub force: bool,
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}

#[derive(ClapArgs)]
pub struct ValidateArgs {
    /// Descriptor file (.yaml, .yml, .json or .toml)
    pub descriptor: PathBuf,
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum TemplatesCmd {
    /// List the available templates and where each one comes from
    List {
        /// Directory with template overrides
        #[arg(long)]
        templates: Option<PathBuf>,
    },
    /// Print the raw text of one template
    Show {
        /// Template id, e.g. `plugin-header`
        id: String,
        /// Directory with template overrides
        #[arg(long)]
        templates: Option<PathBuf>,
    },
    /// Write the templates to a directory so they can be customised
    Export {
        /// Target directory
        dir: PathBuf,
        /// Replace templates that already exist in the directory
        #[arg(long)]
        force: bool,
        /// Directory with template overrides
        #[arg(long)]
        templates: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Print the effective configuration
    Show,
    /// Print the location of the configuration file
    Path,
    /// Write a configuration file with the default values
    Init {
        /// Replace an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
