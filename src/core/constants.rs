//! Default tuning values for the simulation.
//!
//! Distances are in playfield units, speeds in units per tick and
//! accelerations in units per tick squared. One tick is nominally 16ms.

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 Hz
pub const MAX_CATCHUP_TICKS: u32 = 5;

// Bird
pub const GRAVITY: f64 = 0.4;
pub const JUMP_IMPULSE: f64 = -8.0;
pub const BIRD_X: f64 = 50.0;
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const MAX_TILT_DEGREES: f64 = 45.0;
pub const TILT_PER_VELOCITY: f64 = 4.0;

// Pipes
pub const PIPE_WIDTH: f64 = 60.0;
pub const GAP_SIZE: f64 = 200.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const SPAWN_THRESHOLD: f64 = 250.0;
/// Smallest top segment a randomized pipe can have.
pub const MIN_TOP_HEIGHT: f64 = 50.0;
/// Vertical room reserved below the gap when drawing the top segment.
pub const BOTTOM_MARGIN: f64 = 100.0;

// Presentation: logical units covered by one terminal cell
pub const UNITS_PER_COL: f64 = 10.0;
pub const UNITS_PER_ROW: f64 = 20.0;

// Files under ~/.skyward/
pub const DATA_DIR_NAME: &str = ".skyward";
pub const HIGH_SCORE_FILE: &str = "highscore.json";
pub const LOG_FILE: &str = "skyward.log";
pub const CONFIG_FILE: &str = "config.json";
