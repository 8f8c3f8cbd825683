use crate::{digest, write_artifact, Status, WriteOptions};
use engine::{Artifact, ArtifactKind};
use std::fs;
use tempfile::tempdir;

fn artifact(contents: &str) -> Artifact {
    Artifact {
        kind: ArtifactKind::Header,
        file_name: "Demo.h".into(),
        contents: contents.into(),
    }
}

#[test]
fn writes_new_files_and_creates_the_directory() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nested").join("out");
    let entry = write_artifact(&artifact("a\n"), &out, WriteOptions::default());
    assert_eq!(entry.status, Status::Written);
    assert_eq!(fs::read_to_string(out.join("Demo.h")).unwrap(), "a\n");
    assert_eq!(entry.digest.as_deref(), Some(digest("a\n").as_str()));
}

#[test]
fn identical_file_is_unchanged() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Demo.h"), "a\n").unwrap();
    let entry = write_artifact(&artifact("a\n"), dir.path(), WriteOptions::default());
    assert_eq!(entry.status, Status::Unchanged);
}

#[test]
fn different_file_needs_force() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Demo.h");
    fs::write(&path, "hand edited\n").unwrap();

    let entry = write_artifact(&artifact("a\n"), dir.path(), WriteOptions::default());
    assert_eq!(entry.status, Status::Skipped);
    assert_eq!(fs::read_to_string(&path).unwrap(), "hand edited\n");

    let opts = WriteOptions {
        force: true,
        ..Default::default()
    };
    let entry = write_artifact(&artifact("a\n"), dir.path(), opts);
    assert_eq!(entry.status, Status::Overwritten);
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\n");
}

#[test]
fn dry_run_touches_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    let opts = WriteOptions {
        dry_run: true,
        ..Default::default()
    };
    let entry = write_artifact(&artifact("a\n"), &out, opts);
    assert_eq!(entry.status, Status::Planned);
    assert!(!out.exists());
}

#[test]
fn unwritable_target_is_reported() {
    let dir = tempdir().unwrap();
    // a directory where the file should go
    fs::create_dir(dir.path().join("Demo.h")).unwrap();
    let entry = write_artifact(&artifact("a\n"), dir.path(), WriteOptions::default());
    assert_eq!(entry.status, Status::Failed);
    assert!(entry.error.is_some());
}
