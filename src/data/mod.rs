//! Display-side data processing.
//!
//! The monitoring core owns the readings; this module only derives what the
//! views need from the snapshots it hands out.
//!
//! ## Submodules
//!
//! - [`duration`]: Parsing of interval strings (e.g., "5s", "500ms") and elapsed-time formatting
//! - [`series`]: Chart points, axis bounds and labels, plus rate/trend of the latest change
//!
//! ## Data Flow
//!
//! ```text
//! Update (from the ticker)
//!        │
//!        ├──▶ ChartSeries::from_window() (live chart)
//!        │
//!        └──▶ rate_per_minute() / trend() (header arrow)
//! ```

pub mod duration;
pub mod series;

pub use series::{rate_per_minute, trend, ChartSeries, Trend};
