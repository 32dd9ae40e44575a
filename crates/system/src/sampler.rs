use crate::memory::{kib_to_mib, parse_name, parse_rss_kib};
use chrono::{
    format::{Item, StrftimeItems},
    DateTime, Local,
};
use rssmon_core::{MonitorError, Result, Sample};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Reads the resident memory of one process from its status file.
#[derive(Debug, Clone)]
pub struct Sampler {
    pid:          u32,
    status_path:  PathBuf,
    label_format: String,
}

impl Sampler {
    /// Sampler for `<proc_root>/<pid>/status`.
    ///
    /// Fails if `label_format` is not a valid `strftime` string.
    pub fn new(pid: u32, proc_root: impl AsRef<Path>, label_format: impl Into<String>) -> Result<Self> {
        let label_format = label_format.into();
        check_format(&label_format)?;

        Ok(Self {
            pid,
            status_path: proc_root.as_ref().join(pid.to_string()).join("status"),
            label_format,
        })
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn status_path(&self) -> &Path {
        &self.status_path
    }

    fn open(&self) -> Result<BufReader<File>> {
        File::open(&self.status_path)
            .map(BufReader::new)
            .map_err(|source| MonitorError::NotFound {
                pid: self.pid,
                source,
            })
    }

    /// Current `VmRSS` in kilobytes.
    pub fn read_kib(&self) -> Result<u64> {
        parse_rss_kib(self.open()?, self.pid)
    }

    /// One sample stamped with wall-clock now.
    pub fn sample(&self) -> Result<Sample> {
        self.sample_at(Local::now())
    }

    pub fn sample_at(&self, now: DateTime<Local>) -> Result<Sample> {
        let kib = self.read_kib()?;
        Ok(Sample::new(kib_to_mib(kib), now.format(&self.label_format).to_string()))
    }

    /// Command name of the target, best effort.
    pub fn process_name(&self) -> Option<String> {
        parse_name(self.open().ok()?)
    }
}

/// Reject `strftime` strings chrono cannot render.
pub fn check_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(MonitorError::Config(format!("invalid time format '{format}'")));
    }
    Ok(())
}
