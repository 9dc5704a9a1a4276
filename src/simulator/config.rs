//! Simulation configuration.

use crate::core::config::GameConfig;
use crate::core::types::Playfield;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated runs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Ticks after which a still-alive run is stopped
    pub max_ticks_per_run: u64,

    /// Playfield size in logical units
    pub width: f64,
    pub height: f64,

    /// Physics and pipe tuning
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: 60 * 60 * 5, // five minutes at 60 Hz
            width: 800.0,
            height: 600.0,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height)
    }
}
