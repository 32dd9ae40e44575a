use clap::Parser;
use std::path::PathBuf;

/// Printed when either positional argument is missing.
pub const USAGE: &str = "Usage: rssmon <PID> <INTERVAL_MS>";

/// Live resident-memory chart for a single process.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Process to monitor.
    pub pid: Option<u32>,

    /// Sampling interval in milliseconds.
    pub interval_ms: Option<u64>,

    /// Config file (defaults to `$XDG_CONFIG_HOME/rssmon/rssmon.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of points kept in the chart window.
    #[arg(short = 'n', long)]
    pub capacity: Option<usize>,

    /// Write logs here instead of the configured/default file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// `(pid, interval_ms)` when both positionals were given.
    pub fn target(&self) -> Option<(u32, u64)> {
        Some((self.pid?, self.interval_ms?))
    }
}
