//! Reading source abstraction and the default simulated generator.

use std::fmt::Debug;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;

/// Produces one scalar value per tick.
///
/// Implementations may fail with [`MonitorError::SourceUnavailable`]; the
/// monitor propagates that failure without touching its state.
///
/// [`MonitorError::SourceUnavailable`]: crate::MonitorError::SourceUnavailable
///
/// # Example
///
/// ```
/// use glucowatch_core::{ReadingSource, SimulatedSource};
///
/// let mut source = SimulatedSource::seeded(7);
/// let value = source.next_value().unwrap();
/// assert!((60.0..=200.0).contains(&value));
/// ```
pub trait ReadingSource: Send + Debug {
    /// Produce the next value.
    fn next_value(&mut self) -> Result<f64>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}

impl<S: ReadingSource + ?Sized> ReadingSource for Box<S> {
    fn next_value(&mut self) -> Result<f64> {
        (**self).next_value()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

/// Range the simulated generator draws from, in mg/dL.
pub const SIMULATED_RANGE: RangeInclusive<f64> = 60.0..=200.0;

/// Uniform random values in [60, 200], rounded to two decimals.
#[derive(Debug)]
pub struct SimulatedSource {
    rng: StdRng,
    description: String,
}

impl SimulatedSource {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            description: "simulated".to_string(),
        }
    }

    /// Create a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            description: format!("simulated (seed {})", seed),
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSource for SimulatedSource {
    fn next_value(&mut self) -> Result<f64> {
        let raw = self.rng.gen_range(SIMULATED_RANGE);
        Ok((raw * 100.0).round() / 100.0)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
