//! # glucowatch-types
//!
//! Core types for glucowatch. This crate defines the data model shared by the
//! monitoring core and any presentation layer built on top of it.
//!
//! ## Features
//!
//! - `serde`: serialization of readings, bands and updates via serde
//!
//! ## Example
//!
//! ```rust
//! use glucowatch_types::{Reading, SeverityBand, Thresholds};
//!
//! let thresholds = Thresholds::default();
//! assert_eq!(thresholds.band_for(70.0), SeverityBand::Normal);
//! assert_eq!(SeverityBand::Critical.symbol(), "CRIT");
//!
//! let reading = Reading::now(112.5);
//! assert_eq!(reading.time_label().len(), 8);
//! ```

mod band;
mod reading;
mod thresholds;
mod update;

pub use band::*;
pub use reading::*;
pub use thresholds::*;
pub use update::*;

/// Unit label used wherever a value is displayed or exported.
pub const UNIT: &str = "mg/dL";
