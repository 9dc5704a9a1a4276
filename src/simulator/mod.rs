//! Headless simulator for tuning analysis.
//!
//! Plays many runs of the real session with a gap-tracking autopilot and
//! aggregates how long the bird survives and how it dies.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::should_jump;
pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
