//! Background tick driver.
//!
//! Owns the reading source and calls [`SharedMonitor::tick`] on a fixed
//! cadence from a tokio task. Results are delivered over a channel so the UI
//! loop can drain them without blocking.

use std::time::Duration;

use glucowatch_core::{ReadingSource, SharedMonitor};
use glucowatch_types::Update;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Result of one scheduled (or manual) tick.
#[derive(Debug, Clone)]
pub enum TickEvent {
    /// A reading was taken and applied.
    Update(Box<Update>),
    /// The source could not produce a reading; monitor state is unchanged.
    Failed(String),
}

/// Control messages sent to the ticker task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    TickNow,
    Pause,
    Resume,
}

/// Handle to a running ticker task.
///
/// Dropping the handle stops the task.
#[derive(Debug)]
pub struct Ticker {
    events: mpsc::Receiver<TickEvent>,
    commands: mpsc::UnboundedSender<Command>,
    description: String,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the ticker on the current tokio runtime.
    ///
    /// The first tick fires immediately, then every `interval`.
    pub fn spawn(
        monitor: SharedMonitor,
        mut source: Box<dyn ReadingSource>,
        interval: Duration,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::channel(16);
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();
        let description = source.description().to_string();

        tracing::debug!(source = %description, ?interval, "starting ticker");

        let task = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut paused = false;

            loop {
                tokio::select! {
                    _ = timer.tick() => {
                        if paused {
                            continue;
                        }
                    }
                    command = command_rx.recv() => match command {
                        Some(Command::TickNow) => {}
                        Some(Command::Pause) => {
                            tracing::info!("ticker paused");
                            paused = true;
                            continue;
                        }
                        Some(Command::Resume) => {
                            tracing::info!("ticker resumed");
                            paused = false;
                            timer.reset();
                            continue;
                        }
                        // Handle dropped
                        None => break,
                    },
                }

                let event = match monitor.tick(source.as_mut()) {
                    Ok(update) => TickEvent::Update(Box::new(update)),
                    Err(e) => TickEvent::Failed(e.to_string()),
                };
                if event_tx.send(event).await.is_err() {
                    break;
                }
            }
            tracing::debug!("ticker stopped");
        });

        Self {
            events: event_rx,
            commands: command_tx,
            description,
            task,
        }
    }

    /// Take the next pending event without blocking.
    pub fn poll(&mut self) -> Option<TickEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next event.
    pub async fn next_event(&mut self) -> Option<TickEvent> {
        self.events.recv().await
    }

    /// Take a reading right away, even while paused.
    pub fn tick_now(&self) {
        let _ = self.commands.send(Command::TickNow);
    }

    /// Stop scheduled ticks until [`Ticker::resume`].
    pub fn pause(&self) {
        let _ = self.commands.send(Command::Pause);
    }

    pub fn resume(&self) {
        let _ = self.commands.send(Command::Resume);
    }

    /// Description of the underlying source.
    pub fn source_description(&self) -> &str {
        &self.description
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
