//! Main import processor
//!
//! Handles the core logic of:
//! - Walking the input directory top-down
//! - Collapsing burst/motion-photo folders to a single representative file
//! - Resolving capture dates
//! - Moving files into the year/month output tree
//! - Optionally removing directories left empty in the input tree

use crate::clean::remove_empty_dirs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::time::{ResolvedDate, resolve_capture_date};
use crate::transfer::move_into;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, error, info, span};
use walkdir::WalkDir;

/// Folder prefixes that mark a burst or motion-photo export
pub const BURST_FOLDER_PREFIXES: &[&str] = &["IMG_", "PXL_"];

/// Subdirectory prefixes that are never descended into
pub const IGNORED_DIR_PREFIXES: &[&str] = &[".", "thumbnails"];

/// Suffix identifying the cover image inside a burst folder
pub const COVER_SUFFIX: &str = "_COVER.jpg";

/// How the walker treats a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    /// Collapsed to one file, never descended into
    Burst,
    /// Skipped along with everything below it
    Ignored,
    /// Walked normally
    Ordinary,
}

impl DirKind {
    /// Classify a directory by its basename; the walk root is never ignored
    pub fn classify(name: &str, is_root: bool) -> Self {
        if BURST_FOLDER_PREFIXES.iter().any(|p| name.starts_with(p)) {
            DirKind::Burst
        } else if !is_root && IGNORED_DIR_PREFIXES.iter().any(|p| name.starts_with(p)) {
            DirKind::Ignored
        } else {
            DirKind::Ordinary
        }
    }
}

/// Result of processing a single file
#[derive(Debug)]
pub struct FileResult {
    /// Path handed to the classifier
    pub source: PathBuf,
    /// Original path of a burst representative before it was renamed
    pub renamed_from: Option<PathBuf>,
    /// Destination file path (if successful)
    pub destination: Option<PathBuf>,
    /// Resolved capture date
    pub time_info: Option<ResolvedDate>,
    /// Processing status
    pub status: ProcessingStatus,
    /// Error (if failed)
    pub error: Option<Error>,
}

impl FileResult {
    fn failed(source: PathBuf, error: Error) -> Self {
        Self {
            source,
            renamed_from: None,
            destination: None,
            time_info: None,
            status: ProcessingStatus::Failed,
            error: Some(error),
        }
    }
}

/// Status of file processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStatus {
    /// File was moved into the output tree
    Moved,
    /// Processing failed; the file was left where it was
    Failed,
}

/// Processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total_files: usize,
    pub moved: usize,
    pub failed: usize,
    pub burst_renamed: usize,
    pub ignored_dirs: usize,
    pub removed_dirs: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> String {
        format!(
            "Total: {}, Moved: {}, Failed: {}, Burst renamed: {}, Ignored dirs: {}, Removed dirs: {}",
            self.total_files,
            self.moved,
            self.failed,
            self.burst_renamed,
            self.ignored_dirs,
            self.removed_dirs
        )
    }
}

/// Main processor for importing camera files
pub struct Processor {
    config: Config,
    stats: ProcessingStats,
}

impl Processor {
    /// Create a new processor with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            stats: ProcessingStats::new(),
        }
    }

    /// Run the walk, then the optional cleaning pass
    ///
    /// Per-file failures are logged and recorded in the returned results;
    /// they never stop the run.
    pub fn run(&mut self) -> Vec<FileResult> {
        let _span = span!(Level::INFO, "import_run").entered();

        info!(
            input = %self.config.input_dir.display(),
            output = %self.config.output_dir.display(),
            "Scanning input directory..."
        );
        let results = self.walk();

        if self.config.clean {
            info!("Removing empty directories from input...");
            let report = remove_empty_dirs(&self.config.input_dir);
            self.stats.removed_dirs = report.removed.len();
        }

        info!("{}", self.stats.summary());
        results
    }

    /// Top-down walk of the input tree
    fn walk(&mut self) -> Vec<FileResult> {
        let mut results = Vec::new();
        let output_root = self.config.resolved_output_dir();
        let mut entries = WalkDir::new(&self.config.input_dir)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    error!(error = %Error::from(e), "Skipping unreadable entry");
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy();
            let path = entry.path();

            if entry.file_type().is_dir() {
                // An output tree nested in the input holds files already moved
                if entry.depth() > 0 && path.canonicalize().is_ok_and(|p| p == output_root) {
                    entries.skip_current_dir();
                    debug!(?path, "Skipping output directory inside input");
                    continue;
                }

                match DirKind::classify(&name, entry.depth() == 0) {
                    DirKind::Burst => {
                        entries.skip_current_dir();
                        results.extend(self.process_burst_folder(path));
                    }
                    DirKind::Ignored => {
                        entries.skip_current_dir();
                        self.stats.ignored_dirs += 1;
                        info!("IGNORING {}", path.display());
                    }
                    DirKind::Ordinary => {}
                }
                continue;
            }

            if is_file_entry(&entry) && !name.starts_with('.') {
                results.push(self.process_file(path));
            }
        }

        results
    }

    /// Collapse a burst folder to its representative file and import it
    ///
    /// Returns `None` when the folder has no representative.
    fn process_burst_folder(&mut self, dir: &Path) -> Option<FileResult> {
        let _span = span!(Level::DEBUG, "burst_folder", ?dir).entered();

        let files = match list_files(dir) {
            Ok(files) => files,
            Err(e) => {
                error!(?dir, error = %e, "Failed to list burst folder");
                return None;
            }
        };

        let Some(representative) = select_representative(&files) else {
            debug!(?dir, count = files.len(), "No cover file in burst folder, leaving as is");
            return None;
        };

        let renamed = match rename_to_folder_name(representative, dir) {
            Ok(renamed) => renamed,
            Err(e) => {
                error!("{e}");
                self.stats.total_files += 1;
                self.stats.failed += 1;
                return Some(FileResult::failed(representative.clone(), e));
            }
        };

        debug!(from = ?representative, to = ?renamed, "Renamed burst representative");
        self.stats.burst_renamed += 1;

        let mut result = self.process_file(&renamed);
        result.renamed_from = Some(representative.clone());
        Some(result)
    }

    /// Resolve a file's capture date and move it into the output tree
    fn process_file(&mut self, path: &Path) -> FileResult {
        self.stats.total_files += 1;

        let outcome = resolve_capture_date(path).and_then(|resolved| {
            let dest_dir = self
                .config
                .destination_dir(&resolved.date.year, &resolved.date.month);
            move_into(path, &dest_dir).map(|dest| (resolved, dest))
        });

        match outcome {
            Ok((resolved, dest)) => {
                info!(
                    source = ?path,
                    destination = ?dest,
                    date_source = ?resolved.source,
                    date = %resolved.date,
                    "Moved file"
                );
                self.stats.moved += 1;
                FileResult {
                    source: path.to_path_buf(),
                    renamed_from: None,
                    destination: Some(dest),
                    time_info: Some(resolved),
                    status: ProcessingStatus::Moved,
                    error: None,
                }
            }
            Err(e) => {
                error!("{e}");
                self.stats.failed += 1;
                FileResult::failed(path.to_path_buf(), e)
            }
        }
    }

    /// Get processing statistics reference
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Immediate regular files of `dir`, in name order
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if is_file_entry(&entry) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Regular files, plus symlinks that resolve to a regular file
fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Pick the file that stands for a whole burst folder
///
/// A lone file always wins; otherwise the first `*_COVER.jpg` does.
pub fn select_representative(files: &[PathBuf]) -> Option<&PathBuf> {
    if let [only] = files {
        return Some(only);
    }

    files.iter().find(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(COVER_SUFFIX))
            .unwrap_or(false)
    })
}

/// Rename `file` in place to `<folder basename>.jpg`
fn rename_to_folder_name(file: &Path, folder: &Path) -> Result<PathBuf> {
    let folder_name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let target = folder.join(format!("{folder_name}.jpg"));

    fs::rename(file, &target).map_err(|source| Error::Rename {
        from: file.to_path_buf(),
        to: target.clone(),
        source,
    })?;

    Ok(target)
}
