//! Diagnostic logging setup.
//!
//! The TUI owns stdout and stderr while it runs, so logs go to a file when
//! one is given. Headless runs log to stderr. Otherwise no subscriber is
//! installed and `tracing` calls are no-ops.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Where log output should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Pick a target from the command-line options. A log file wins over stderr.
    pub fn select(log_file: Option<&'a Path>, headless: bool) -> Self {
        match (log_file, headless) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Disabled,
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber for `target`.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
        }
        LogTarget::Disabled => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_takes_priority() {
        let path = Path::new("glucowatch.log");
        assert_eq!(LogTarget::select(Some(path), true), LogTarget::File(path));
        assert_eq!(LogTarget::select(Some(path), false), LogTarget::File(path));
    }

    #[test]
    fn test_headless_logs_to_stderr() {
        assert_eq!(LogTarget::select(None, true), LogTarget::Stderr);
        assert_eq!(LogTarget::select(None, false), LogTarget::Disabled);
    }

    #[test]
    fn test_disabled_installs_nothing() {
        assert!(init(LogTarget::Disabled).is_ok());
    }
}
