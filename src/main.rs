//! Camera Importer - sort camera exports into a year/month tree
//!
//! A CLI tool that moves media files from an input directory into
//! `output/YYYY/MM/` based on camera filename conventions or EXIF
//! capture dates.

use anyhow::Result;
use camera_importer::{Cli, Processor};
use clap::Parser;
use std::time::Instant;
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    // Setup logging; the guard flushes buffered lines when main returns
    let _guard = setup_logging(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "Camera Importer starting");

    let config = cli.to_config();
    if cli.verbose {
        info!(?config, "Configuration loaded");
    }

    if let Err(e) = config.validate() {
        error!("{e}");
        return Err(e.into());
    }

    let mut processor = Processor::new(config);
    processor.run();

    info!("Elapsed time: {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Setup logging to stdout through a non-blocking writer
fn setup_logging(cli: &Cli) -> WorkerGuard {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(fmt::layer().json().with_writer(non_blocking))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_target(false).with_writer(non_blocking))
            .init();
    }

    guard
}
