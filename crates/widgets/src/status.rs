use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use rssmon_core::AppState;
use rssmon_system::memory::format_megabytes;
use rssmon_theme::Theme;

/// One-line footer: current and peak RSS, window size, and the last
/// sampling error if the previous tick failed.
#[derive(Debug, Default)]
pub struct StatusWidget;

impl StatusWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Paragraph<'a> {
        let current = state
            .window
            .latest()
            .map(format_megabytes)
            .unwrap_or_else(|| "-".to_string());

        let mut spans = vec![
            Span::styled(
                format!(" RSS {current}"),
                Style::default().fg(theme.series).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  peak {}", format_megabytes(state.window.peak()))),
            Span::raw(format!("  {} pts", state.window.len())),
        ];

        if state.failures > 0 {
            spans.push(Span::raw(format!("  {} failed", state.failures)));
        }
        if let Some(err) = &state.last_error {
            spans.push(Span::styled(format!("  {err}"), Style::default().fg(Color::Red)));
        }
        if state.stopped {
            spans.push(Span::styled("  [stopped]", Style::default().fg(Color::Yellow)));
        }

        Paragraph::new(Line::from(spans))
    }
}
