use std::collections::{HashSet, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Visits every regular file below `root`, breadth first.
///
/// Symlinks are skipped and unreadable entries are logged and ignored, so a
/// half-readable override directory still yields the templates it can.
pub fn visit<C>(root: &Path, callback: &mut C) -> anyhow::Result<()>
where
    C: FnMut(&Path) -> anyhow::Result<()>,
{
    let mut pending: VecDeque<PathBuf> = VecDeque::new();
    let mut visited: HashSet<PathBuf> = HashSet::new();
    pending.push_back(root.to_path_buf());

    while let Some(current) = pending.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        let metadata = match fs::symlink_metadata(&current) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                debug!(path = %current.display(), "Permission denied");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let file_type = metadata.file_type();
        if file_type.is_symlink() {
            debug!(path = %current.display(), "Symlink skipped");
        } else if file_type.is_file() {
            callback(&current)?;
        } else if file_type.is_dir() {
            let entries = match fs::read_dir(&current) {
                Ok(e) => e,
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    debug!(path = %current.display(), "Permission denied");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            let mut children: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .collect();
            // read_dir order is platform dependent
            children.sort();
            pending.extend(children);
        }
    }

    Ok(())
}
