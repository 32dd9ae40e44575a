use crate::{history::History, sampler::Sampler};
use chrono::{DateTime, Local};
use rssmon_core::{Result, WindowSnapshot};

/// Series name handed to the chart.
pub const SERIES_NAME: &str = "rss";

/// Everything one refresh loop mutates: the target's sampler and the window.
#[derive(Debug, Clone)]
pub struct MemoryMonitor {
    sampler: Sampler,
    history: History,
}

impl MemoryMonitor {
    pub fn new(sampler: Sampler, history: History) -> Self {
        Self { sampler, history }
    }

    /// Sample once and append. On error the window is left untouched.
    pub fn tick(&mut self) -> Result<WindowSnapshot> {
        self.tick_at(Local::now())
    }

    /// [`tick`](Self::tick) with the label taken from `now`.
    pub fn tick_at(&mut self, now: DateTime<Local>) -> Result<WindowSnapshot> {
        let sample = self.sampler.sample_at(now)?;
        self.history.push(sample);
        Ok(self.snapshot())
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        self.history.snapshot(SERIES_NAME)
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
