use crate::app::App;
use ratatui::DefaultTerminal;
use rssmon_core::{MonitorError, Result};

/// Raw-mode alternate-screen session. Restores the terminal when dropped,
/// including on early return and panic.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        let terminal = ratatui::try_init()
            .map_err(|e| MonitorError::Terminal(format!("cannot initialise terminal: {e}")))?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, app: &App) -> Result<()> {
        self.terminal
            .draw(|frame| app.view(frame))
            .map(|_| ())
            .map_err(|e| MonitorError::Terminal(format!("draw failed: {e}")))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
