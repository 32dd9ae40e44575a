use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `rssmon.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Sliding window settings.
    pub window: WindowConfig,
    /// Where process status files are read from.
    pub source: SourceConfig,
    /// Chart colours.
    pub theme: ThemeConfig,
    /// Log file; the terminal belongs to the chart, so logs never go there.
    pub log_file: Option<PathBuf>,
}

/// Bounded history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Number of points `N`. The window holds at most `N + 1`.
    pub capacity: usize,
    /// `strftime` format of the synthetic baseline labels.
    pub seed_label_format: String,
    /// `strftime` format of live sample labels.
    pub label_format: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity:          100,
            seed_label_format: "%H:%M:%S".to_string(),
            label_format:      "%M:%S".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Root of the per-process status tree.
    pub proc_root: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from("/proc"),
        }
    }
}

/// Theme / styling configuration.
///
/// Colours accept `#RRGGBB`, a 256-colour index (`"33"`) or a basic name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub axes:     String,
    pub y_labels: String,
    pub x_labels: String,
    pub series:   String,
    pub border:   String,
    /// Title shown next to the quit hint.
    pub title:    String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            axes:     "red".to_string(),
            y_labels: "green".to_string(),
            x_labels: "cyan".to_string(),
            series:   "33".to_string(),
            border:   "white".to_string(),
            title:    "Mem".to_string(),
        }
    }
}
