use crate::{
    error::{MonitorError, Result},
    state::WindowSnapshot,
};

/// Destination of the window contents produced on every tick.
///
/// The refresh loop is the only caller. Implementations hand the snapshot
/// over to whatever draws it; they never read the window directly.
pub trait ChartSink: Send {
    /// Push the current window. Returning [`MonitorError::SinkClosed`] stops
    /// the refresh loop.
    fn push(&mut self, snapshot: WindowSnapshot) -> Result<()>;

    /// Report a failed tick. Diagnostic only; the default drops it.
    fn report(&mut self, _error: &MonitorError) -> Result<()> {
        Ok(())
    }

    /// Called once when the refresh loop stops.
    fn stopped(&mut self) {}
}
