//! Entry point for the command-line interface.
//! Delegates to dedicated modules for argument handling, generation,
//! template management and configuration.

use skelgen::args::{parse_cli, Commands};
use skelgen::config::handle_config;
use skelgen::generate::{run_generate, run_validate};
use skelgen::templates::handle_templates;

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Validate(args) => run_validate(args),
        Commands::Templates(cmd) => handle_templates(cmd),
        Commands::Config(cmd) => handle_config(cmd),
    }
}
