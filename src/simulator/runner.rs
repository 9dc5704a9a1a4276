//! Headless runs of the real [`GameSession`] under the autopilot.

use super::autopilot::should_jump;
use super::config::SimConfig;
use super::report::SimReport;
use crate::core::session::{CrashCause, GameSession, TickOutcome};
use crate::core::types::GamePhase;
use crate::utils::persistence::MemoryHighScoreStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Outcome of a single simulated run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub score: u32,
    pub ticks: u64,
    /// None if the run hit `max_ticks_per_run` still alive.
    pub crash: Option<CrashCause>,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let runs: Vec<RunStats> = (0..config.num_runs)
        .map(|run_idx| {
            let rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
                None => StdRng::from_entropy(),
            };
            let stats = simulate_single_run(config, rng);
            debug!(run = run_idx + 1, score = stats.score, ticks = stats.ticks, "run finished");
            stats
        })
        .collect();

    SimReport::from_runs(&runs)
}

/// Play one run from the first jump until a crash or the tick limit.
pub fn simulate_single_run(config: &SimConfig, rng: StdRng) -> RunStats {
    let field = config.playfield();
    let mut session = GameSession::new(
        config.game.clone(),
        MemoryHighScoreStore::default(),
        rng,
        field,
    );
    session.jump(field);

    let mut crash = None;
    while session.phase() == GamePhase::Running && session.tick_count() < config.max_ticks_per_run
    {
        if should_jump(&session.view(), field) {
            session.jump(field);
        }
        if let TickOutcome::Crashed(cause) = session.tick(field) {
            crash = Some(cause);
        }
    }

    RunStats {
        score: session.score(),
        ticks: session.tick_count(),
        crash,
    }
}
