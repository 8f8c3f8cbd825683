//! Writes generated artifacts to disk and reports the outcome as text or
//! JSON.

use engine::ArtifactKind;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

mod writer;

pub use writer::{digest, failed_entry, write_artifact, Status, WriteOptions};

/// Returns the status colored with simple ANSI codes.
fn color_status(status: Status) -> String {
    let code = match status {
        Status::Written | Status::Overwritten => "\x1b[32m",
        Status::Unchanged | Status::Planned => "\x1b[36m",
        Status::Skipped => "\x1b[33m",
        Status::Failed => "\x1b[31m",
    };
    format!("{code}{:<11}\x1b[0m", status.as_str())
}

fn simple_box(title: &str) -> String {
    let width = title.chars().count() + 2;
    format!(
        "╭{}╮\n│ {} │\n╰{}╯\n",
        "─".repeat(width),
        title,
        "─".repeat(width)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Supported formats for the run summary.
pub enum Format {
    /// Human-readable output in plain text.
    Text,
    /// JSON structure for integrations.
    Json,
}

#[derive(Debug, Clone, Serialize)]
/// Outcome for a single artifact.
pub struct ReportEntry {
    pub kind: ArtifactKind,
    pub file: String,
    pub path: PathBuf,
    pub status: Status,
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportEntry {
    pub(crate) fn fail(mut self, error: String) -> Self {
        self.status = Status::Failed;
        self.error = Some(error);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
/// Everything one generation run did.
pub struct GenerationReport {
    pub plugin: String,
    pub out_dir: PathBuf,
    pub dry_run: bool,
    pub artifacts: Vec<ReportEntry>,
}

impl GenerationReport {
    pub fn count(&self, status: Status) -> usize {
        self.artifacts.iter().filter(|a| a.status == status).count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(Status::Failed) > 0
    }
}

#[derive(Serialize)]
struct Totals {
    written: usize,
    overwritten: usize,
    unchanged: usize,
    skipped: usize,
    planned: usize,
    failed: usize,
}

#[derive(Serialize)]
/// Wrapper used when serialising to JSON.
struct ReportOut<'a> {
    #[serde(flatten)]
    report: &'a GenerationReport,
    totals: Totals,
}

/// Prints the report to stdout in the selected format.
pub fn print_report(report: &GenerationReport, fmt: Format) -> io::Result<()> {
    let mut out = io::stdout();
    write_report(&mut out, report, fmt)
}

/// Writes the report to a generic `Write`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &GenerationReport,
    fmt: Format,
) -> io::Result<()> {
    match fmt {
        Format::Text => {
            let title = if report.dry_run {
                format!("{} (dry run)", report.plugin)
            } else {
                report.plugin.clone()
            };
            writeln!(out, "{}", simple_box(&title))?;
            writeln!(out, "    Output directory: {}\n", report.out_dir.display())?;
            for a in &report.artifacts {
                writeln!(out, "    {} {} ({} bytes)", color_status(a.status), a.file, a.bytes)?;
                if let Some(e) = &a.error {
                    writeln!(out, "        ↳  {e}")?;
                }
            }
            writeln!(out)?;
            let mut parts = Vec::new();
            for status in [
                Status::Written,
                Status::Overwritten,
                Status::Unchanged,
                Status::Skipped,
                Status::Planned,
                Status::Failed,
            ] {
                let n = report.count(status);
                if n > 0 {
                    parts.push(format!("{n} {}", status.as_str()));
                }
            }
            if parts.is_empty() {
                writeln!(out, "Total: nothing to do")?;
            } else {
                writeln!(out, "Total: {}", parts.join(", "))?;
            }
            if report.count(Status::Skipped) > 0 {
                writeln!(out, "⚠ Existing files were kept; use --force to overwrite them.")?;
            }
        }
        Format::Json => {
            let json = ReportOut {
                report,
                totals: Totals {
                    written: report.count(Status::Written),
                    overwritten: report.count(Status::Overwritten),
                    unchanged: report.count(Status::Unchanged),
                    skipped: report.count(Status::Skipped),
                    planned: report.count(Status::Planned),
                    failed: report.count(Status::Failed),
                },
            };
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
