//! Population time-series bookkeeping.

use serde::{Deserialize, Serialize};

/// Per-tick population history collected while a simulation runs.
///
/// The grass series is scaled by the sheep gain so all three curves share a
/// comparable range, following the original demo's convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationSeries {
    pub grass: Vec<f64>,
    pub sheep: Vec<usize>,
    pub wolf: Vec<usize>,
}

impl PopulationSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            grass: Vec::with_capacity(ticks),
            sheep: Vec::with_capacity(ticks),
            wolf: Vec::with_capacity(ticks),
        }
    }

    /// Append one tick's worth of counts
    pub fn record(&mut self, grass: f64, sheep: usize, wolf: usize) {
        self.grass.push(grass);
        self.sheep.push(sheep);
        self.wolf.push(wolf);
    }

    /// Number of ticks recorded so far
    pub fn ticks(&self) -> usize {
        self.grass.len()
    }
}
