use ratatui::{
    layout::{Constraint, Layout},
    text::Line,
    widgets::Block,
    Frame,
};
use rssmon_core::{AppState, Message, WindowSnapshot};
use rssmon_renderer::ChartData;
use rssmon_theme::Theme;
use rssmon_widgets::{MemoryWidget, StatusWidget};

/// Whether the render loop keeps going after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Rendering-side state. Only ever fed by pushed messages; it never touches
/// the refresh loop's window.
pub struct App {
    state:  AppState,
    chart:  ChartData,
    theme:  Theme,
    memory: MemoryWidget,
    status: StatusWidget,
}

impl App {
    pub fn new(pid: u32, process_name: Option<String>, window: WindowSnapshot, theme: Theme) -> Self {
        let chart = ChartData::from_snapshot(&window);
        Self {
            state: AppState::new(pid, process_name, window),
            chart,
            theme,
            memory: MemoryWidget::new(),
            status: StatusWidget::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn update(&mut self, message: Message) -> Control {
        match message {
            Message::Snapshot(window) => {
                self.chart = ChartData::from_snapshot(&window);
                self.state.window = window;
                self.state.last_error = None;
            }
            Message::SampleFailed(error) => {
                self.state.failures += 1;
                self.state.last_error = Some(error);
            }
            Message::Stopped => {
                self.state.stopped = true;
            }
            Message::Quit => return Control::Quit,
        }
        Control::Continue
    }

    pub fn view(&self, frame: &mut Frame) {
        let title = format!(" {}: {} ", self.theme.title, self.state.target_label());
        let block = Block::bordered()
            .border_style(self.theme.border_style())
            .title(Line::from(" PRESS Q TO QUIT "))
            .title(Line::from(title).right_aligned());

        let area = frame.area();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [chart_area, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(inner);
        frame.render_widget(self.memory.view(&self.chart, &self.theme), chart_area);
        frame.render_widget(self.status.view(&self.state, &self.theme), status_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use rssmon_core::Sample;

    fn app() -> App {
        App::new(4242, Some("postgres".into()), WindowSnapshot::default(), Theme::default())
    }

    #[test]
    fn snapshot_replaces_window_and_clears_error() {
        let mut app = app();
        assert_eq!(app.update(Message::SampleFailed("gone".into())), Control::Continue);
        assert_eq!(app.state().failures, 1);

        let samples = [Sample::new(2.0, "00:01")];
        app.update(Message::Snapshot(WindowSnapshot::from_samples("rss", &samples)));
        assert_eq!(app.state().window.latest(), Some(2.0));
        assert_eq!(app.state().last_error, None);
        assert_eq!(app.state().failures, 1);
    }

    #[test]
    fn quit_and_stopped() {
        let mut app = app();
        assert_eq!(app.update(Message::Stopped), Control::Continue);
        assert!(app.state().stopped);
        assert_eq!(app.update(Message::Quit), Control::Quit);
    }

    #[test]
    fn frame_has_titles() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| app.view(f)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("PRESS Q TO QUIT"));
        assert!(text.contains("Mem: postgres (4242)"));
    }
}
