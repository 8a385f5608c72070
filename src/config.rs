use serde::{Deserialize, Serialize};

use crate::plot::PlotOptions;

/// Configuration for a pipeline run. The defaults reproduce the canonical
/// demo: 50 items, capacity 100, seed 42.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of items to generate.
    pub n_items: usize,
    /// Knapsack capacity bound on the total selected weight.
    pub capacity: i64,
    /// Seed for the PRNG, so runs are reproducible.
    pub prng_seed: u64,
    /// Optional plot drawing options.
    #[serde(default)]
    pub plot: PlotOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n_items: 50,
            capacity: 100,
            prng_seed: 42,
            plot: PlotOptions::default(),
        }
    }
}
