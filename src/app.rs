//! Application state and navigation logic.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use glucowatch_core::{MonitorConfig, SharedMonitor, DEFAULT_EXPORT_FILE};
use glucowatch_types::{SeverityBand, Update};

use crate::assistant::Assistant;
use crate::ticker::{TickEvent, Ticker};
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Latest reading, chart of the window and advice.
    Live,
    /// Recent Low, High and Critical readings.
    History,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Live => View::History,
            View::History => View::Live,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        // Only two views, so this mirrors next()
        self.next()
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Live => "Live",
            View::History => "History",
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,
    pub show_chat: bool,

    // Monitoring
    monitor: SharedMonitor,
    ticker: Ticker,
    pub latest: Option<Update>,
    pub last_error: Option<String>,
    pub last_updated: Option<Instant>,
    pub paused: bool,
    pending_alert: Option<SeverityBand>,

    // Alerts and export
    pub muted: bool,
    pub export_path: PathBuf,

    // Assistant overlay
    pub assistant: Assistant,
    pub chat_input: String,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App reading from `monitor`, driven by `ticker`.
    pub fn new(monitor: SharedMonitor, ticker: Ticker, theme: Theme) -> Self {
        Self {
            running: true,
            current_view: View::Live,
            show_help: false,
            show_chat: false,
            monitor,
            ticker,
            latest: None,
            last_error: None,
            last_updated: None,
            paused: false,
            pending_alert: None,
            muted: false,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            assistant: Assistant::new(),
            chat_input: String::new(),
            theme,
            status_message: None,
        }
    }

    /// Where `e` writes the CSV snapshot.
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    /// Start with alerts silenced.
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Returns a description of the current reading source.
    pub fn source_description(&self) -> &str {
        self.ticker.source_description()
    }

    /// Monitor sizing and thresholds.
    pub fn config(&self) -> MonitorConfig {
        self.monitor.config()
    }

    /// Handle to the shared monitor, for snapshot reads.
    pub fn monitor(&self) -> &SharedMonitor {
        &self.monitor
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Drain pending ticker events.
    ///
    /// Returns the number of events applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.ticker.poll() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Apply one ticker event to the displayed state.
    pub fn apply(&mut self, event: TickEvent) {
        match event {
            TickEvent::Update(update) => {
                if update.classification.is_alert() {
                    tracing::warn!(
                        value = update.reading.value,
                        band = %update.band(),
                        advice = update.advice().unwrap_or_default(),
                        "alert"
                    );
                    if !self.muted {
                        self.pending_alert = Some(update.band());
                    }
                } else {
                    tracing::debug!(value = update.reading.value, band = %update.band(), "reading");
                }
                self.latest = Some(*update);
                self.last_error = None;
                self.last_updated = Some(Instant::now());
            }
            TickEvent::Failed(err) => {
                tracing::warn!(error = %err, "reading failed");
                self.last_error = Some(err);
            }
        }
    }

    /// Take the band of an alert raised since the last call, if any.
    pub fn take_alert(&mut self) -> Option<SeverityBand> {
        self.pending_alert.take()
    }

    /// Time since the last successful reading.
    pub fn since_update(&self) -> Option<Duration> {
        self.last_updated.map(|t| t.elapsed())
    }

    /// Write the current window to [`App::export_path`].
    pub fn export_csv(&self) -> Result<usize> {
        self.export_to(&self.export_path)
    }

    /// Write the current window to `path`, returning the number of rows.
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let window = self.monitor.window();
        glucowatch_core::export_csv(path, &window)?;
        tracing::info!(path = %path.display(), rows = window.len(), "exported window");
        Ok(window.len())
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Show the history view, or go back to live if it is already shown.
    pub fn toggle_history(&mut self) {
        self.current_view = match self.current_view {
            View::History => View::Live,
            View::Live => View::History,
        };
    }

    /// Ask the ticker for a reading right away.
    pub fn tick_now(&mut self) {
        self.ticker.tick_now();
    }

    /// Pause or resume scheduled readings.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            self.ticker.pause();
            self.set_status_message("Paused".to_string());
        } else {
            self.ticker.resume();
            self.set_status_message("Resumed".to_string());
        }
    }

    /// Silence or restore the alert bell.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if self.muted {
            self.pending_alert = None;
            self.set_status_message("Alerts muted".to_string());
        } else {
            self.set_status_message("Alerts on".to_string());
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Open the assistant overlay.
    pub fn open_chat(&mut self) {
        self.show_chat = true;
    }

    /// Close the assistant overlay, keeping the transcript.
    pub fn close_chat(&mut self) {
        self.show_chat = false;
    }

    pub fn chat_push(&mut self, c: char) {
        self.chat_input.push(c);
    }

    pub fn chat_pop(&mut self) {
        self.chat_input.pop();
    }

    /// Send the typed question to the assistant.
    pub fn submit_chat(&mut self) {
        let question = std::mem::take(&mut self.chat_input);
        self.assistant.ask(&question);
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
