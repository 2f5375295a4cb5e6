//! # glucowatch-core
//!
//! The stateful core of glucowatch. It ingests a stream of timestamped
//! readings, classifies each against ordered thresholds, keeps a bounded
//! sliding window for display, and keeps bounded per-band histories for
//! alerting.
//!
//! ```text
//! ReadingSource ──▶ MonitorCore::tick ──▶ Update
//!                        │
//!                        ├──▶ Classifier::classify
//!                        ├──▶ SlidingWindow::push
//!                        └──▶ CategoryLedger::record
//! ```
//!
//! The core performs no I/O of its own apart from [`export_csv`], never logs,
//! and hands every error back to its caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use glucowatch_core::{MonitorConfig, MonitorCore, SimulatedSource};
//! use glucowatch_types::SeverityBand;
//!
//! let mut core = MonitorCore::new(MonitorConfig::default()).unwrap();
//! let mut source = SimulatedSource::seeded(42);
//!
//! for _ in 0..25 {
//!     let update = core.tick(&mut source).unwrap();
//!     if let Some(advice) = update.advice() {
//!         println!("{}: {}", update.band(), advice);
//!     }
//! }
//!
//! assert_eq!(core.window().len(), 20);
//! assert!(core.ledger().len(SeverityBand::Critical) <= 5);
//! ```

mod classifier;
mod clock;
mod config;
mod error;
mod export;
mod ledger;
mod monitor;
mod shared;
mod source;
mod window;

pub use classifier::{classify, Classifier};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::MonitorConfig;
pub use error::{MonitorError, Result};
pub use export::{export_csv, write_csv, CSV_HEADER, DEFAULT_EXPORT_FILE};
pub use ledger::{CategoryLedger, DEFAULT_LEDGER_CAPACITY};
pub use monitor::MonitorCore;
pub use shared::SharedMonitor;
pub use source::{ReadingSource, SimulatedSource, SIMULATED_RANGE};
pub use window::{SlidingWindow, DEFAULT_WINDOW_CAPACITY};
