// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # glucowatch
//!
//! A terminal monitor and library for simulated real-time blood sugar
//! readings.
//!
//! Readings come from a [`ReadingSource`], are classified and stored by the
//! [`glucowatch_core`] monitor, and are shown in an interactive terminal UI
//! with a live chart, per-band history, alerts and a small assistant.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (series) │    │(render) │    │         │ │
//! │  └────▲────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │ TickEvent                                           │
//! │  ┌────┴────┐    ┌──────────────┐                            │
//! │  │ ticker  │───▶│ SharedMonitor│ (glucowatch-core)          │
//! │  └────┬────┘    └──────────────┘                            │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── SimulatedSource | FileSource | ChannelSource│
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, alerts and export
//! - **[`ticker`]**: Background task that takes a reading every interval
//! - **[`source`]**: Reading sources beyond the built-in simulator
//! - **[`data`]**: Chart series, trend and duration helpers for the views
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`assistant`]**: Keyword-matching health assistant
//! - **[`settings`]** and **[`logging`]**: Startup configuration
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Simulated readings every 5 seconds
//! glucowatch
//!
//! # Replay a previous export, faster
//! glucowatch --replay blood_sugar_data.csv --interval 1s
//!
//! # No UI: print 10 readings as JSON lines
//! glucowatch --headless --ticks 10 --json
//! ```
//!
//! ### As a library with a channel source
//!
//! ```
//! use glucowatch::{ChannelSource, MonitorConfig, MonitorCore, ReadingSource};
//!
//! let (tx, mut source) = ChannelSource::create("meter");
//! let mut core = MonitorCore::new(MonitorConfig::default()).unwrap();
//!
//! tx.try_send(195.0).unwrap();
//! let update = core.tick(&mut source).unwrap();
//! assert!(update.advice().is_some());
//! ```

pub mod app;
pub mod assistant;
pub mod data;
pub mod events;
pub mod logging;
pub mod settings;
pub mod source;
pub mod ticker;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use assistant::Assistant;
pub use glucowatch_core::{MonitorConfig, MonitorCore, MonitorError, SharedMonitor};
pub use glucowatch_types::{Reading, SeverityBand, Thresholds, Update};
pub use settings::Settings;
pub use source::{ChannelSource, FileSource, ReadingSource, SimulatedSource};
pub use ticker::{TickEvent, Ticker};
