use chrono::{DateTime, Local, TimeDelta};
use rssmon_core::{Sample, WindowSnapshot};
use std::collections::VecDeque;
use std::time::Duration;

/// Upper bound on the up-front allocation; larger windows grow on demand.
const PREALLOC_LIMIT: usize = 4096;

/// Bounded FIFO of recent samples, the data behind the chart.
///
/// Eviction happens only once the length is already *above* `capacity`, so
/// the window settles at `capacity + 1` entries.
#[derive(Debug, Clone)]
pub struct History {
    samples:  VecDeque<Sample>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.saturating_add(1).min(PREALLOC_LIMIT)),
            capacity,
        }
    }

    /// A window pre-filled with `capacity` zero samples so the chart spans
    /// its full width before real data arrives.
    ///
    /// Entry `k` is labelled `now + interval * (capacity - k)`.
    pub fn seeded(capacity: usize, now: DateTime<Local>, interval: Duration, format: &str) -> Self {
        let step = i64::try_from(interval.as_millis()).unwrap_or(i64::MAX);
        let mut history = Self::new(capacity);

        for k in 0..capacity {
            let offset = step.saturating_mul((capacity - k) as i64);
            let at = TimeDelta::try_milliseconds(offset)
                .and_then(|d| now.checked_add_signed(d))
                .unwrap_or(now);
            history
                .samples
                .push_back(Sample::new(0.0, at.format(format).to_string()));
        }
        history
    }

    /// Append a sample, evicting the oldest first if the window is over capacity.
    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest length the window can reach.
    pub fn max_len(&self) -> usize {
        self.capacity.saturating_add(1)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Copy of the current contents in insertion order.
    pub fn snapshot(&self, series: &str) -> WindowSnapshot {
        WindowSnapshot::from_samples(series, &self.samples)
    }
}
