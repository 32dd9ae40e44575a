pub mod colors;

pub use colors::parse_color;

use ratatui::style::{Color, Style};
use rssmon_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// Calling [`Theme::from_config`] is infallible: invalid colour strings fall
/// back to the built-in defaults with a warning.
#[derive(Debug, Clone)]
pub struct Theme {
    pub axes:     Color,
    pub y_labels: Color,
    pub x_labels: Color,
    pub series:   Color,
    pub border:   Color,
    pub title:    String,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            axes:     color_or(&cfg.axes, "axes", Color::Red),
            y_labels: color_or(&cfg.y_labels, "y_labels", Color::Green),
            x_labels: color_or(&cfg.x_labels, "x_labels", Color::Cyan),
            series:   color_or(&cfg.series, "series", Color::Indexed(33)),
            border:   color_or(&cfg.border, "border", Color::White),
            title:    cfg.title.clone(),
        }
    }

    pub fn axis_style(&self) -> Style {
        Style::default().fg(self.axes)
    }

    pub fn series_style(&self) -> Style {
        Style::default().fg(self.series)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

fn color_or(value: &str, field: &str, fallback: Color) -> Color {
    parse_color(value).unwrap_or_else(|| {
        tracing::warn!("invalid colour {value:?} for theme.{field}; using default");
        fallback
    })
}
