//! Reading sources.
//!
//! The [`ReadingSource`] trait lives in `glucowatch-core`; this module adds
//! the stand-in generators the TUI can be pointed at besides the default
//! [`SimulatedSource`].
//!
//! - [`FileSource`]: replays values from a text file or an exported CSV
//! - [`ChannelSource`]: receives values pushed from another task or thread

mod channel;
mod file;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use glucowatch_core::{ReadingSource, SimulatedSource};
