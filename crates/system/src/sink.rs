use rssmon_core::{ChartSink, Message, MonitorError, Result, WindowSnapshot};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::debug;

/// [`ChartSink`] that forwards everything to the terminal task as
/// [`Message`]s over a bounded channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<Message>,
}

/// Create a sink and the receiver the rendering side drains.
pub fn channel(buffer: usize) -> (ChannelSink, mpsc::Receiver<Message>) {
    let (tx, rx) = mpsc::channel(buffer);
    (ChannelSink { tx }, rx)
}

impl ChannelSink {
    fn send(&self, message: Message) -> Result<()> {
        match self.tx.try_send(message) {
            Ok(()) => Ok(()),
            // The next tick supersedes this frame.
            Err(TrySendError::Full(_)) => {
                debug!("renderer busy; dropping frame");
                Ok(())
            }
            Err(TrySendError::Closed(_)) => Err(MonitorError::SinkClosed),
        }
    }
}

impl ChartSink for ChannelSink {
    fn push(&mut self, snapshot: WindowSnapshot) -> Result<()> {
        self.send(Message::Snapshot(snapshot))
    }

    fn report(&mut self, error: &MonitorError) -> Result<()> {
        self.send(Message::SampleFailed(error.to_string()))
    }

    fn stopped(&mut self) {
        if let Err(e) = self.tx.try_send(Message::Stopped) {
            debug!("stop notice not delivered: {e}");
        }
    }
}

/// Records everything it is given.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub snapshots: Vec<WindowSnapshot>,
    pub failures: Vec<String>,
    pub stopped: bool,
}

#[cfg(test)]
impl ChartSink for RecordingSink {
    fn push(&mut self, snapshot: WindowSnapshot) -> Result<()> {
        self.snapshots.push(snapshot);
        Ok(())
    }

    fn report(&mut self, error: &MonitorError) -> Result<()> {
        self.failures.push(error.to_string());
        Ok(())
    }

    fn stopped(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_snapshots() {
        let (mut sink, mut rx) = channel(2);
        sink.push(WindowSnapshot::default()).unwrap();
        sink.report(&MonitorError::MissingMetric { pid: 1 }).unwrap();

        assert!(matches!(rx.try_recv(), Ok(Message::Snapshot(_))));
        match rx.try_recv() {
            Ok(Message::SampleFailed(text)) => assert!(text.contains("VmRSS")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn full_channel_drops_frame() {
        let (mut sink, mut rx) = channel(1);
        sink.push(WindowSnapshot::default()).unwrap();
        sink.push(WindowSnapshot::default()).unwrap();
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stop_notice_on_full_channel_is_dropped_quietly() {
        let (mut sink, mut rx) = channel(1);
        sink.push(WindowSnapshot::default()).unwrap();
        sink.stopped();

        assert!(matches!(rx.try_recv(), Ok(Message::Snapshot(_))));
        assert!(rx.try_recv().is_err());

        sink.stopped();
        assert!(matches!(rx.try_recv(), Ok(Message::Stopped)));
    }

    #[test]
    fn closed_channel_is_sink_closed() {
        let (mut sink, rx) = channel(1);
        drop(rx);
        assert!(matches!(
            sink.push(WindowSnapshot::default()),
            Err(MonitorError::SinkClosed)
        ));
    }
}
