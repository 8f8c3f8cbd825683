use crate::{digest, write_report, Format, GenerationReport, ReportEntry, Status};
use engine::ArtifactKind;
use std::path::PathBuf;

fn entry(kind: ArtifactKind, file: &str, status: Status) -> ReportEntry {
    ReportEntry {
        kind,
        file: file.into(),
        path: PathBuf::from("out").join(file),
        status,
        bytes: 12,
        digest: Some(digest("contents")),
        error: None,
    }
}

fn sample_report() -> GenerationReport {
    let mut failed = entry(ArtifactKind::Schema, "DemoPlugin.json", Status::Failed);
    failed.digest = None;
    failed.bytes = 0;
    failed.error = Some("template 'plugin-json' not found".into());
    GenerationReport {
        plugin: "Demo".into(),
        out_dir: PathBuf::from("out"),
        dry_run: false,
        artifacts: vec![
            entry(ArtifactKind::Header, "Demo.h", Status::Written),
            entry(ArtifactKind::Source, "Demo.cpp", Status::Skipped),
            failed,
        ],
    }
}

#[test]
fn text_lists_every_artifact_and_totals() {
    let mut buf = Vec::new();
    write_report(&mut buf, &sample_report(), Format::Text).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("│ Demo │"));
    assert!(text.contains("Demo.h (12 bytes)"));
    assert!(text.contains("↳  template 'plugin-json' not found"));
    assert!(text.contains("Total: 1 written, 1 skipped, 1 failed"));
    assert!(text.contains("--force"));
}

#[test]
fn text_marks_dry_runs() {
    let mut report = sample_report();
    report.dry_run = true;
    let mut buf = Vec::new();
    write_report(&mut buf, &report, Format::Text).unwrap();
    assert!(String::from_utf8(buf).unwrap().contains("│ Demo (dry run) │"));
}

#[test]
fn json_has_entries_and_totals() {
    let mut buf = Vec::new();
    write_report(&mut buf, &sample_report(), Format::Json).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(v["plugin"], "Demo");
    assert_eq!(v["artifacts"][0]["kind"], "header");
    assert_eq!(v["artifacts"][0]["status"], "written");
    assert_eq!(v["artifacts"][0]["digest"], digest("contents"));
    assert!(v["artifacts"][2].get("digest").is_none());
    assert_eq!(v["totals"]["failed"], 1);
    assert_eq!(v["totals"]["written"], 1);
}

#[test]
fn failures_are_counted() {
    let report = sample_report();
    assert!(report.has_failures());
    assert_eq!(report.count(Status::Skipped), 1);
    assert_eq!(report.count(Status::Planned), 0);
}
