pub mod error;
pub mod event;
pub mod sink;
pub mod state;

pub use error::{MonitorError, Result};
pub use event::Message;
pub use sink::ChartSink;
pub use state::{AppState, Sample, WindowSnapshot};
