//! Simulation report generation.

use super::runner::RunStats;
use crate::core::session::CrashCause;
use serde::Serialize;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub avg_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub avg_ticks: f64,

    // How runs ended
    pub out_of_bounds: u32,
    pub pipe_crashes: u32,
    pub timeouts: u32,

    pub scores: Vec<u32>,
}

impl SimReport {
    pub fn from_runs(runs: &[RunStats]) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let count = |cause: Option<CrashCause>| runs.iter().filter(|r| r.crash == cause).count() as u32;

        Self {
            num_runs,
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor,
            min_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_ticks: runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor,
            out_of_bounds: count(Some(CrashCause::OutOfBounds)),
            pipe_crashes: count(Some(CrashCause::Pipe)),
            timeouts: count(None),
            scores: runs.iter().map(|r| r.score).collect(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Simulation Report ===\n");
        out.push_str(&format!("Runs:            {}\n", self.num_runs));
        out.push_str(&format!(
            "Score:           avg {:.2}, min {}, max {}\n",
            self.avg_score, self.min_score, self.max_score
        ));
        out.push_str(&format!(
            "Ticks survived:  avg {:.0} (~{:.1}s at 60 Hz)\n",
            self.avg_ticks,
            self.avg_ticks / 60.0
        ));
        out.push_str(&format!(
            "Endings:         {} out of bounds, {} pipe hits, {} timeouts\n",
            self.out_of_bounds, self.pipe_crashes, self.timeouts
        ));
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
