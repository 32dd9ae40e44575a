use std::collections::BTreeMap;

/// Central UI state; all widgets read from this.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Monitored process.
    pub pid: u32,
    /// Command name from the status file, if it could be read at startup.
    pub process_name: Option<String>,
    /// Last window pushed by the refresh loop.
    pub window: WindowSnapshot,
    /// Most recent sampling error; cleared by the next good tick.
    pub last_error: Option<String>,
    /// Failed ticks since start.
    pub failures: u64,
    /// Refresh loop has stopped.
    pub stopped: bool,
}

impl AppState {
    pub fn new(pid: u32, process_name: Option<String>, window: WindowSnapshot) -> Self {
        Self {
            pid,
            process_name,
            window,
            ..Self::default()
        }
    }

    /// `"name (pid)"`, or just the pid when the name is unknown.
    #[must_use]
    pub fn target_label(&self) -> String {
        match &self.process_name {
            Some(name) => format!("{name} ({})", self.pid),
            None => self.pid.to_string(),
        }
    }
}

/// One observation of resident memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Resident memory in megabytes (`kB / 1024`).
    pub value: f64,
    /// Display label only. Ordering is by insertion, never by this string.
    pub label: String,
}

impl Sample {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Render input built from the window: values by position plus a
/// position → label mapping for the X axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowSnapshot {
    /// Series name shown in the chart legend.
    pub series: String,
    pub values: Vec<f64>,
    pub labels: BTreeMap<usize, String>,
}

impl WindowSnapshot {
    pub fn from_samples<'a>(
        series: impl Into<String>,
        samples: impl IntoIterator<Item = &'a Sample>,
    ) -> Self {
        let mut values = Vec::new();
        let mut labels = BTreeMap::new();
        for (i, sample) in samples.into_iter().enumerate() {
            values.push(sample.value);
            labels.insert(i, sample.label.clone());
        }
        Self {
            series: series.into(),
            values,
            labels,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent value, if any.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Largest value in the window, `0.0` when empty.
    #[must_use]
    pub fn peak(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}
