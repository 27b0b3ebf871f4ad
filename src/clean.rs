//! Removal of directories left empty by an import

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use walkdir::WalkDir;

/// Outcome of a cleaning pass
#[derive(Debug, Default)]
pub struct CleanReport {
    /// Directories that were removed, in removal order
    pub removed: Vec<PathBuf>,
    /// Directories that were empty but could not be removed
    pub failed: Vec<PathBuf>,
}

/// Remove every empty directory under `root`, `root` included
///
/// The walk is contents-first, so removing the last child of a directory
/// makes that directory eligible later in the same pass.
pub fn remove_empty_dirs(root: &Path) -> CleanReport {
    let mut report = CleanReport::default();

    for entry in WalkDir::new(root).contents_first(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!(error = %Error::from(e), "Skipping unreadable entry while cleaning");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        match remove_if_empty(path) {
            Ok(true) => {
                debug!(?path, "Removed empty directory");
                report.removed.push(path.to_path_buf());
            }
            Ok(false) => {}
            Err(e) => {
                error!(?path, error = %e, "Failed to remove empty directory");
                report.failed.push(path.to_path_buf());
            }
        }
    }

    info!(removed = report.removed.len(), "Cleaned input directory");
    report
}

/// Remove `dir` if it has no entries left; returns whether it was removed
fn remove_if_empty(dir: &Path) -> Result<bool> {
    if fs::read_dir(dir)?.next().is_some() {
        return Ok(false);
    }
    fs::remove_dir(dir)?;
    Ok(true)
}
