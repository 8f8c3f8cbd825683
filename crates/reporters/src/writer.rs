use engine::{Artifact, ArtifactKind};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::ReportEntry;

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Replace files whose contents differ from the generated text.
    pub force: bool,
    /// Report what would happen without touching the disk.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// What happened to one artifact.
pub enum Status {
    Written,
    Overwritten,
    Unchanged,
    /// The file exists with other contents and `force` was not given.
    Skipped,
    /// Dry run: the file would be written.
    Planned,
    Failed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Written => "written",
            Status::Overwritten => "overwritten",
            Status::Unchanged => "unchanged",
            Status::Skipped => "skipped",
            Status::Planned => "planned",
            Status::Failed => "failed",
        }
    }
}

/// Content digest used to detect unchanged files.
pub fn digest(contents: &str) -> String {
    blake3::hash(contents.as_bytes()).to_hex().to_string()
}

/// Places `artifact` below `out_dir`. Never fails: problems end up in the
/// returned entry.
pub fn write_artifact(artifact: &Artifact, out_dir: &Path, opts: WriteOptions) -> ReportEntry {
    let path = out_dir.join(&artifact.file_name);
    let new_digest = digest(&artifact.contents);
    let mut entry = ReportEntry {
        kind: artifact.kind,
        file: artifact.file_name.clone(),
        path: path.clone(),
        status: Status::Planned,
        bytes: artifact.contents.len(),
        digest: Some(new_digest.clone()),
        error: None,
    };

    let existing = match fs::read_to_string(&path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Existing file unreadable");
            return entry.fail(format!("failed to read {}: {e}", path.display()));
        }
    };

    let status = match &existing {
        Some(old) if digest(old) == new_digest => Status::Unchanged,
        Some(_) if !opts.force => Status::Skipped,
        Some(_) => Status::Overwritten,
        None => Status::Written,
    };

    if opts.dry_run {
        entry.status = match status {
            Status::Written | Status::Overwritten => Status::Planned,
            other => other,
        };
        return entry;
    }
    entry.status = status;
    if matches!(status, Status::Unchanged | Status::Skipped) {
        debug!(path = %path.display(), status = status.as_str(), "Artifact not written");
        return entry;
    }

    if let Err(e) = fs::create_dir_all(out_dir) {
        return entry.fail(format!("failed to create {}: {e}", out_dir.display()));
    }
    if let Err(e) = fs::write(&path, &artifact.contents) {
        warn!(path = %path.display(), error = %e, "Write failed");
        return entry.fail(format!("failed to write {}: {e}", path.display()));
    }
    debug!(path = %path.display(), bytes = entry.bytes, "Artifact written");
    entry
}

/// Entry for an artifact that could not be generated at all.
pub fn failed_entry(kind: ArtifactKind, file: String, out_dir: &Path, error: String) -> ReportEntry {
    ReportEntry {
        kind,
        path: out_dir.join(&file),
        file,
        status: Status::Failed,
        bytes: 0,
        digest: None,
        error: Some(error),
    }
}
