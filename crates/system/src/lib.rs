pub mod history;
pub mod memory;
pub mod monitor;
pub mod sampler;
pub mod sink;

pub use history::History;
pub use monitor::{MemoryMonitor, SERIES_NAME};
pub use sampler::Sampler;
pub use sink::{channel, ChannelSink};

use rssmon_core::{ChartSink, Result};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Lifecycle of a [`RefreshLoop`]. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Running,
    Stopped,
}

/// Timer-driven driver: sample, append, snapshot, push. One tick completes
/// fully before the next is considered, so the loop is the window's only
/// writer and needs no lock.
#[derive(Debug)]
pub struct RefreshLoop<S> {
    monitor:  MemoryMonitor,
    sink:     S,
    interval: Duration,
    state:    RefreshState,
    ticks:    u64,
    failures: u64,
}

impl<S: ChartSink> RefreshLoop<S> {
    pub fn new(monitor: MemoryMonitor, interval: Duration, sink: S) -> Self {
        Self {
            monitor,
            sink,
            interval,
            state: RefreshState::Running,
            ticks: 0,
            failures: 0,
        }
    }

    /// Run a single tick synchronously.
    ///
    /// A failed sample is logged and reported to the sink; it only skips this
    /// tick. The returned error is the sink's, and means the renderer is gone.
    pub fn tick_once(&mut self) -> Result<()> {
        self.ticks += 1;
        match self.monitor.tick() {
            Ok(snapshot) => self.sink.push(snapshot),
            Err(e) if !e.is_sampling_failure() => Err(e),
            Err(e) => {
                self.failures += 1;
                warn!(pid = self.monitor.sampler().pid(), "sample failed, skipping tick: {e}");
                self.sink.report(&e)
            }
        }
    }

    /// Tick every `interval` until `cancel` fires or the sink closes.
    ///
    /// The first tick happens one interval after start. Returns the loop in
    /// its `Stopped` state.
    pub async fn run(mut self, cancel: CancellationToken) -> Self {
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            pid = self.monitor.sampler().pid(),
            interval_ms = self.interval.as_millis() as u64,
            "refresh loop running"
        );

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    if let Err(e) = self.tick_once() {
                        warn!("stopping refresh loop: {e}");
                        break;
                    }
                }
            }
        }

        self.state = RefreshState::Stopped;
        self.sink.stopped();
        info!(ticks = self.ticks, failures = self.failures, "refresh loop stopped");
        self
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// Ticks taken so far, failed ones included.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn monitor(&self) -> &MemoryMonitor {
        &self.monitor
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Spawn the refresh loop on the Tokio runtime.
pub fn spawn_monitor<S>(refresh: RefreshLoop<S>, cancel: CancellationToken) -> JoinHandle<RefreshLoop<S>>
where
    S: ChartSink + 'static,
{
    tokio::spawn(refresh.run(cancel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use rssmon_core::Message;

    const PID: u32 = 31337;

    fn proc_dir(status: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PID.to_string());
        std::fs::create_dir_all(&path).unwrap();
        std::fs::write(path.join("status"), status).unwrap();
        dir
    }

    fn refresh_loop<S: ChartSink>(dir: &tempfile::TempDir, capacity: usize, sink: S) -> RefreshLoop<S> {
        let sampler = Sampler::new(PID, dir.path(), "%M:%S").unwrap();
        let monitor = MemoryMonitor::new(sampler, History::new(capacity));
        RefreshLoop::new(monitor, Duration::from_millis(100), sink)
    }

    #[test]
    fn failed_tick_is_reported_not_fatal() {
        let dir = proc_dir("Name:\tx\n");
        let mut refresh = refresh_loop(&dir, 5, RecordingSink::default());

        refresh.tick_once().unwrap();
        refresh.tick_once().unwrap();

        assert_eq!(refresh.ticks(), 2);
        assert_eq!(refresh.failures(), 2);
        assert!(refresh.sink().snapshots.is_empty());
        assert_eq!(refresh.sink().failures.len(), 2);
        assert!(refresh.monitor().history().is_empty());
    }

    #[test]
    fn each_tick_pushes_full_window() {
        let dir = proc_dir("VmRSS:\t 1024 kB\n");
        let mut refresh = refresh_loop(&dir, 2, RecordingSink::default());

        for _ in 0..5 {
            refresh.tick_once().unwrap();
        }
        let lens: Vec<usize> = refresh.sink().snapshots.iter().map(|s| s.len()).collect();
        assert_eq!(lens, vec![1, 2, 3, 3, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_until_cancelled() {
        let dir = proc_dir("VmRSS:\t 1024 kB\n");
        let cancel = CancellationToken::new();
        let handle = spawn_monitor(refresh_loop(&dir, 10, RecordingSink::default()), cancel.clone());

        time::sleep(Duration::from_millis(350)).await;
        cancel.cancel();
        let done = handle.await.unwrap();

        assert_eq!(done.state(), RefreshState::Stopped);
        assert_eq!(done.ticks(), 3);
        assert_eq!(done.monitor().history().len(), 3);
        assert!(done.sink().stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_first_tick_mutates_nothing() {
        let dir = proc_dir("VmRSS:\t 1024 kB\n");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let done = refresh_loop(&dir, 10, RecordingSink::default()).run(cancel).await;
        assert_eq!(done.ticks(), 0);
        assert!(done.monitor().history().is_empty());
        assert!(done.sink().snapshots.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn closed_renderer_stops_loop() {
        let dir = proc_dir("VmRSS:\t 1024 kB\n");
        let (sink, rx) = channel(4);
        drop(rx);

        let done = refresh_loop(&dir, 10, sink).run(CancellationToken::new()).await;
        assert_eq!(done.state(), RefreshState::Stopped);
        assert_eq!(done.ticks(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn channel_receives_snapshots_then_stopped() {
        let dir = proc_dir("VmRSS:\t 3072 kB\n");
        let (sink, mut rx) = channel(16);
        let cancel = CancellationToken::new();
        let handle = spawn_monitor(refresh_loop(&dir, 10, sink), cancel.clone());

        match rx.recv().await {
            Some(Message::Snapshot(snap)) => assert_eq!(snap.values, vec![3.0]),
            other => panic!("unexpected: {other:?}"),
        }
        cancel.cancel();
        handle.await.unwrap();

        let mut last = None;
        while let Some(msg) = rx.recv().await {
            last = Some(msg);
        }
        assert!(matches!(last, Some(Message::Stopped)));
    }
}
