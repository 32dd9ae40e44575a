use ratatui::{
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType},
};
use rssmon_renderer::ChartData;
use rssmon_theme::Theme;

/// Line chart of the resident-memory window, in megabytes.
#[derive(Debug, Default)]
pub struct MemoryWidget;

impl MemoryWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, data: &'a ChartData, theme: &'a Theme) -> Chart<'a> {
        let dataset = Dataset::default()
            .name(data.series.as_str())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.series_style())
            .data(&data.points);

        let x_labels: Vec<Span> = data
            .x_labels
            .iter()
            .map(|l| Span::styled(l.as_str(), Style::default().fg(theme.x_labels)))
            .collect();
        let y_labels: Vec<Span> = data
            .y_labels
            .iter()
            .map(|l| Span::styled(l.as_str(), Style::default().fg(theme.y_labels)))
            .collect();

        Chart::new(vec![dataset])
            .x_axis(
                Axis::default()
                    .style(theme.axis_style())
                    .bounds(data.x_bounds)
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled("MB", Style::default().fg(theme.y_labels)))
                    .style(theme.axis_style())
                    .bounds(data.y_bounds)
                    .labels(y_labels),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use rssmon_core::{Sample, WindowSnapshot};

    #[test]
    fn draws_series_and_scale() {
        let samples: Vec<Sample> = (0..11)
            .map(|i| Sample::new(i as f64, format!("00:{i:02}")))
            .collect();
        let data = ChartData::from_snapshot(&WindowSnapshot::from_samples("rss", &samples));
        let theme = Theme::default();
        let widget = MemoryWidget::new();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| f.render_widget(widget.view(&data, &theme), f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.chars().any(|c| ('\u{2800}'..='\u{28FF}').contains(&c)));
        assert!(text.contains("20"));
    }
}
