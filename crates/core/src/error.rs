use std::num::ParseIntError;
use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("config error: {0}")]
    Config(String),

    /// The status file of the target could not be opened (process gone,
    /// never existed, or permission denied).
    #[error("status of process {pid} unavailable: {source}")]
    NotFound {
        pid: u32,
        #[source]
        source: std::io::Error,
    },

    /// A `VmRSS:` line was found but its value is not an integer.
    #[error("malformed VmRSS value {value:?} for process {pid}: {source}")]
    Parse {
        pid: u32,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("no VmRSS line in status of process {pid}")]
    MissingMetric { pid: u32 },

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("chart renderer disconnected")]
    SinkClosed,

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl MonitorError {
    /// `true` for errors produced by a single failed sample. These skip one
    /// tick and never stop the refresh loop.
    #[must_use]
    pub fn is_sampling_failure(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Parse { .. } | Self::MissingMetric { .. } | Self::Io { .. }
        )
    }
}

pub type Result<T, E = MonitorError> = std::result::Result<T, E>;
