pub mod cli;
pub mod schema;

pub use cli::{Args, USAGE};
pub use schema::{MonitorConfig, SourceConfig, ThemeConfig, WindowConfig};

use rssmon_core::{MonitorError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Load configuration from a TOML file.  Returns `MonitorConfig::default()`
/// if the file doesn't exist so the monitor always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<MonitorConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(MonitorConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| MonitorError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| MonitorError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("rssmon").join("rssmon.toml")
}

/// Largest accepted window; the baseline is allocated up front.
pub const MAX_CAPACITY: usize = 100_000;

/// Default log destination when neither CLI nor config names one.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("rssmon.log")
}

/// Fully resolved settings for one run. The target pid never changes after
/// this is built.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub pid:       u32,
    pub interval:  Duration,
    pub window:    WindowConfig,
    pub source:    SourceConfig,
    pub theme:     ThemeConfig,
    pub log_file:  PathBuf,
}

impl RunConfig {
    /// Merge CLI arguments over the file config and validate the result.
    ///
    /// Returns `Ok(None)` when a positional argument is missing; the caller
    /// prints [`USAGE`] and exits cleanly.
    pub fn resolve(args: &Args, file: MonitorConfig) -> Result<Option<Self>> {
        let Some((pid, interval_ms)) = args.target() else {
            return Ok(None);
        };

        if pid == 0 {
            return Err(MonitorError::Config("pid must be a positive integer".into()));
        }
        if interval_ms == 0 {
            return Err(MonitorError::Config("interval must be at least 1 ms".into()));
        }

        let mut window = file.window;
        if let Some(capacity) = args.capacity {
            window.capacity = capacity;
        }
        if window.capacity == 0 || window.capacity > MAX_CAPACITY {
            return Err(MonitorError::Config(format!(
                "window capacity must be between 1 and {MAX_CAPACITY}"
            )));
        }

        let log_file = args
            .log_file
            .clone()
            .or(file.log_file)
            .unwrap_or_else(default_log_path);

        Ok(Some(Self {
            pid,
            interval: Duration::from_millis(interval_ms),
            window,
            source: file.source,
            theme: file.theme,
            log_file,
        }))
    }

    /// Parse the CLI-selected (or default) config file and resolve.
    pub fn from_args(args: &Args) -> Result<Option<Self>> {
        let path = args.config.clone().unwrap_or_else(default_path);
        Self::resolve(args, load(path)?)
    }
}
