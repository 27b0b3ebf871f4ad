//! CLI argument parsing with clap

use crate::config::{Config, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

/// Camera Importer - sort camera exports into a year/month tree
///
/// Dates come from the conventional IMG_/VID_/PXL_ filename prefix or,
/// for other JPEGs, from the EXIF DateTimeOriginal tag.
#[derive(Parser, Debug)]
#[command(name = "camera-importer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input directory to scan for media files
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Output directory for the year/month tree
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Remove all empty subdirectories from the input folder after the run
    #[arg(long)]
    pub clean: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log lines as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Convert CLI arguments into the run configuration
    pub fn to_config(&self) -> Config {
        Config::new(&self.input, &self.output, self.clean)
    }
}
