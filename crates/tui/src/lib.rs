//! Terminal front-end for `rssmon`.
//!
//! Owns the terminal session and wires the background refresh loop to the
//! chart: the loop pushes [`Message`]s over a channel, this side draws them
//! and turns quit keys into cancellation.

pub mod app;
pub mod input;
pub mod terminal;

pub use app::{App, Control};

use chrono::Local;
use crossterm::event::EventStream;
use futures::StreamExt;
use rssmon_config::RunConfig;
use rssmon_core::{Message, MonitorError, Result};
use rssmon_system::{sampler::check_format, spawn_monitor, History, MemoryMonitor, RefreshLoop, Sampler};
use rssmon_theme::Theme;
use terminal::TerminalSession;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Frames buffered between the refresh loop and the renderer.
const CHANNEL_DEPTH: usize = 4;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Run the monitor until the user quits.
pub async fn run(config: RunConfig) -> Result<()> {
    check_format(&config.window.seed_label_format)?;
    let sampler = Sampler::new(
        config.pid,
        &config.source.proc_root,
        config.window.label_format.clone(),
    )?;

    let process_name = sampler.process_name();
    if process_name.is_none() {
        warn!(pid = config.pid, "cannot read {}; charting anyway", sampler.status_path().display());
    }

    let history = History::seeded(
        config.window.capacity,
        Local::now(),
        config.interval,
        &config.window.seed_label_format,
    );
    let monitor = MemoryMonitor::new(sampler, history);
    let mut app = App::new(
        config.pid,
        process_name,
        monitor.snapshot(),
        Theme::from_config(&config.theme),
    );

    let mut session = TerminalSession::enter()?;

    let (sink, mut rx) = rssmon_system::channel(CHANNEL_DEPTH);
    let cancel = CancellationToken::new();
    let refresh = spawn_monitor(RefreshLoop::new(monitor, config.interval, sink), cancel.clone());

    let result = event_loop(&mut session, &mut app, &mut rx, &cancel).await;

    cancel.cancel();
    match refresh.await {
        Ok(done) => info!(ticks = done.ticks(), failures = done.failures(), "monitor finished"),
        Err(e) => error!("refresh task failed: {e}"),
    }
    drop(session);

    result
}

// ── Render loop ───────────────────────────────────────────────────────────────

async fn event_loop(
    session: &mut TerminalSession,
    app: &mut App,
    rx: &mut mpsc::Receiver<Message>,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut events = EventStream::new();
    session.draw(app)?;

    loop {
        let message = tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => match input::translate(&event) {
                    Some(message) => message,
                    // Resize and other input: just redraw.
                    None => {
                        session.draw(app)?;
                        continue;
                    }
                },
                Some(Err(e)) => return Err(MonitorError::Terminal(format!("input error: {e}"))),
                None => Message::Quit,
            },
            message = rx.recv(), if !app.state().stopped => message.unwrap_or(Message::Stopped),
        };

        if app.update(message) == Control::Quit {
            info!("quit requested");
            cancel.cancel();
            return Ok(());
        }
        session.draw(app)?;
    }
}
