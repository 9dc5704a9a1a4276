//! Tunable simulation parameters.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Every fixed constant the simulation reads, gathered in one place.
///
/// Fixed for the lifetime of a session. Playfield dimensions are not part of
/// the config; they are passed into each operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Velocity added per tick.
    pub gravity: f64,
    /// Velocity set (not added) on a jump. Must be negative.
    pub jump_impulse: f64,
    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub pipe_width: f64,
    pub gap_size: f64,
    /// Leftward pipe movement per tick.
    pub pipe_speed: f64,
    /// A new pipe spawns once the newest one is this far left of the right edge.
    pub spawn_threshold: f64,
    pub min_top_height: f64,
    pub bottom_margin: f64,
    pub tick_interval_ms: u64,
    pub max_tilt_degrees: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            gap_size: GAP_SIZE,
            pipe_speed: PIPE_SPEED,
            spawn_threshold: SPAWN_THRESHOLD,
            min_top_height: MIN_TOP_HEIGHT,
            bottom_margin: BOTTOM_MARGIN,
            tick_interval_ms: TICK_INTERVAL_MS,
            max_tilt_degrees: MAX_TILT_DEGREES,
        }
    }
}

/// Reasons a config is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("jump_impulse must be negative, got {0}")]
    JumpNotUpward(f64),
    #[error("tick_interval_ms must be non-zero")]
    ZeroTickInterval,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gravity", self.gravity),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("gap_size", self.gap_size),
            ("pipe_speed", self.pipe_speed),
            ("spawn_threshold", self.spawn_threshold),
            ("max_tilt_degrees", self.max_tilt_degrees),
        ];
        for (field, value) in positive {
            // `!(value > 0.0)` also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        let non_negative = [
            ("bird_x", self.bird_x),
            ("min_top_height", self.min_top_height),
            ("bottom_margin", self.bottom_margin),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if !(self.jump_impulse < 0.0) {
            return Err(ConfigError::JumpNotUpward(self.jump_impulse));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Load a JSON config, falling back to defaults if the file is missing,
    /// unreadable, malformed or invalid. Missing keys take their defaults.
    pub fn load_or_default(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no config file, using defaults");
                return Self::default();
            }
        };
        let config: Self = match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                return Self::default();
            }
        };
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// Platform config file location (e.g. `~/.config/skyward/config.json`).
    pub fn default_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("", "", "skyward")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}
