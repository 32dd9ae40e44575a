//! rssmon — live resident-memory chart for a single process.
//!
//! Run with:  `RUST_LOG=debug rssmon <PID> <INTERVAL_MS>`

use anyhow::{Context, Result};
use clap::Parser;
use rssmon_config::{Args, RunConfig, USAGE};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if args.target().is_none() {
        println!("{USAGE}");
        return Ok(());
    }

    let Some(config) = RunConfig::from_args(&args)? else {
        println!("{USAGE}");
        return Ok(());
    };

    init_logging(&config.log_file)?;
    tracing::info!(
        pid = config.pid,
        interval_ms = config.interval.as_millis() as u64,
        "rssmon v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    rssmon_tui::run(config).await.map_err(Into::into)
}

/// Structured logging into a file: the terminal is owned by the chart.
/// RUST_LOG controls verbosity (default: info).
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
