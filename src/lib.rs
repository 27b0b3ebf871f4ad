//! Camera Importer - sort camera exports into a year/month tree
//!
//! This library moves photos and videos out of an import directory into
//! `output/YYYY/MM/`, with support for:
//! - Date extraction from `IMG_`/`VID_`/`PXL_` camera filenames
//! - EXIF `DateTimeOriginal` extraction for other JPEGs
//! - Collapsing burst and motion-photo folders to their cover image
//! - Skipping hidden and thumbnail directories
//! - Removing directories left empty after the import

pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod process;
pub mod time;
pub mod transfer;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
pub use process::{FileResult, ProcessingStats, ProcessingStatus, Processor};
pub use time::{CaptureDate, DateSource, ResolvedDate};
