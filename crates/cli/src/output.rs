use clap::ValueEnum;
use reporters::{self, GenerationReport};

/// Supported output formats for the run summary.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for reporters::Format {
    fn from(fmt: Format) -> Self {
        match fmt {
            Format::Text => reporters::Format::Text,
            Format::Json => reporters::Format::Json,
        }
    }
}

pub fn print_report(report: &GenerationReport, fmt: Format) -> anyhow::Result<()> {
    reporters::print_report(report, fmt.into())?;
    Ok(())
}
