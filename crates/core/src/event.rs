use crate::state::WindowSnapshot;

/// All messages that flow from the refresh loop to the rendering side.
///
/// Sources:
/// - Refresh loop → `Snapshot`, `SampleFailed`, `Stopped`
/// - Keyboard     → `Quit` (handled locally by the terminal task)
#[derive(Debug, Clone)]
pub enum Message {
    /// Window contents after a successful tick.
    Snapshot(WindowSnapshot),
    /// A tick was skipped; carries the rendered error for the status line.
    SampleFailed(String),
    /// The refresh loop has reached its terminal state.
    Stopped,
    /// Quit requested by the user.
    Quit,
}
