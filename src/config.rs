//! Run configuration for the camera importer

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default input directory when `--input` is not given
pub const DEFAULT_INPUT_DIR: &str = "input/";

/// Default output directory when `--output` is not given
pub const DEFAULT_OUTPUT_DIR: &str = "output/";

/// Immutable configuration for a single run
///
/// Built once from the command line and handed by reference to the
/// [`Processor`](crate::process::Processor) and everything below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the tree to import from
    pub input_dir: PathBuf,

    /// Root of the year/month tree to import into (created on demand)
    pub output_dir: PathBuf,

    /// Remove directories left empty in the input tree after the walk
    pub clean: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            clean: false,
        }
    }
}

impl Config {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, clean: bool) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            clean,
        }
    }

    /// Check the configuration before any file is touched
    ///
    /// The input must be an existing directory. The output may live anywhere,
    /// including inside the input; the walker skips it.
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.is_dir() {
            return Err(Error::InvalidInputDirectory {
                path: self.input_dir.clone(),
            });
        }

        Ok(())
    }

    /// Absolute form of `output_dir`, resolved even before it exists
    pub fn resolved_output_dir(&self) -> PathBuf {
        canonicalize_lenient(&self.output_dir)
    }

    /// Destination directory for a capture year and month
    pub fn destination_dir(&self, year: &str, month: &str) -> PathBuf {
        self.output_dir.join(year).join(month)
    }
}

/// Canonicalize the closest existing ancestor and re-append the missing tail
fn canonicalize_lenient(path: &Path) -> PathBuf {
    let mut existing = path.to_path_buf();
    let mut tail = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return tail
                .into_iter()
                .rev()
                .fold(canonical, |acc: PathBuf, part| acc.join(part));
        }
        match (existing.file_name().map(|n| n.to_os_string()), existing.parent()) {
            (Some(name), Some(parent)) => {
                tail.push(name);
                existing = if parent.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    parent.to_path_buf()
                };
            }
            _ => return path.to_path_buf(),
        }
    }
}
