//! Error types for the monitoring core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the monitoring core.
///
/// The core never logs or retries; every error goes straight back to the
/// caller, which owns the recovery policy.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The reading source could not produce a value this tick.
    #[error("reading source unavailable: {0}")]
    SourceUnavailable(String),

    /// The window snapshot could not be written.
    #[error("failed to export to {}: {source}", path.display())]
    ExportFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration values violate an invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MonitorError {
    /// Convenience constructor for source failures.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        MonitorError::SourceUnavailable(reason.into())
    }
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, MonitorError>;
