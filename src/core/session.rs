//! The game state machine: one owned aggregate holding a run's state.
//!
//! `GameSession` drives the physics, pipe and collision units in a fixed
//! order each tick and owns the high score, writing it through the
//! [`HighScoreStore`] the moment it is beaten. Playfield dimensions are
//! passed into every operation rather than stored.

use super::collision::{find_collision, mark_passed};
use super::config::GameConfig;
use super::physics::{apply_jump, step_bird, PhysicsStep};
use super::pipes::{advance_pipes, spawn_pipe};
use super::types::{Bird, GamePhase, Pipe, Playfield};
use crate::utils::persistence::HighScoreStore;
use rand::Rng;
use tracing::{info, warn};

/// What a jump event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Idle -> Running; the first pipe was spawned.
    Started,
    /// Velocity set to the jump impulse.
    Flapped,
    /// Game over; jumps do nothing until reset.
    Ignored,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    OutOfBounds,
    Pipe,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed.
    Skipped,
    /// One step simulated; `pipes_passed` were newly cleared.
    Advanced { pipes_passed: u32 },
    /// The run is over.
    Crashed(CrashCause),
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub phase: GamePhase,
    pub bird: &'a Bird,
    pub pipes: &'a [Pipe],
    pub score: u32,
    pub high_score: u32,
    pub config: &'a GameConfig,
}

/// Authoritative game state plus its injected collaborators.
pub struct GameSession<S, R> {
    config: GameConfig,
    phase: GamePhase,
    /// The bird. Mutated by the session; exposed for inspection and tests.
    pub bird: Bird,
    /// Pipes in spawn order, which is also left-to-right order.
    pub pipes: Vec<Pipe>,
    score: u32,
    high_score: u32,
    tick_count: u64,
    store: S,
    rng: R,
}

impl<S: HighScoreStore, R: Rng> GameSession<S, R> {
    /// New idle session. Reads the stored high score exactly once.
    pub fn new(config: GameConfig, mut store: S, rng: R, field: Playfield) -> Self {
        let high_score = store.load();
        info!(high_score, "session created");
        Self {
            bird: Bird::at_rest(config.bird_x, field.height),
            config,
            phase: GamePhase::Idle,
            pipes: Vec::new(),
            score: 0,
            high_score,
            tick_count: 0,
            store,
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Ticks simulated in the current run.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            phase: self.phase,
            bird: &self.bird,
            pipes: &self.pipes,
            score: self.score,
            high_score: self.high_score,
            config: &self.config,
        }
    }

    /// Jump event: starts an idle run, flaps while running, ignored when over.
    pub fn jump(&mut self, field: Playfield) -> JumpOutcome {
        match self.phase {
            GamePhase::Idle => {
                // The field may have changed size since construction or reset.
                self.bird = Bird::at_rest(self.config.bird_x, field.height);
                let first = spawn_pipe(&mut self.rng, field, &self.config);
                self.pipes.push(first);
                self.phase = GamePhase::Running;
                info!(width = field.width, height = field.height, "run started");
                JumpOutcome::Started
            }
            GamePhase::Running => {
                apply_jump(&mut self.bird, &self.config);
                JumpOutcome::Flapped
            }
            GamePhase::Over => JumpOutcome::Ignored,
        }
    }

    /// One simulation step: physics, then pipes, then collision and scoring.
    /// Does nothing unless running.
    pub fn tick(&mut self, field: Playfield) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Skipped;
        }
        self.tick_count += 1;

        if step_bird(&mut self.bird, field.height, &self.config) == PhysicsStep::OutOfBounds {
            return self.end_run(CrashCause::OutOfBounds);
        }

        advance_pipes(&mut self.pipes, &mut self.rng, field, &self.config);

        // A collision ends the run before anything is scored this tick.
        if find_collision(&self.bird, &self.pipes, field.height, &self.config).is_some() {
            return self.end_run(CrashCause::Pipe);
        }

        let pipes_passed = mark_passed(&self.bird, &mut self.pipes, &self.config);
        if pipes_passed > 0 {
            self.add_score(pipes_passed);
        }
        TickOutcome::Advanced { pipes_passed }
    }

    /// Over -> Idle: re-centre the bird, clear pipes and zero the score.
    /// Returns false (and changes nothing) in any other phase.
    pub fn reset(&mut self, field: Playfield) -> bool {
        if self.phase != GamePhase::Over {
            return false;
        }
        self.bird = Bird::at_rest(self.config.bird_x, field.height);
        self.pipes.clear();
        self.score = 0;
        self.tick_count = 0;
        self.phase = GamePhase::Idle;
        true
    }

    fn end_run(&mut self, cause: CrashCause) -> TickOutcome {
        self.phase = GamePhase::Over;
        info!(?cause, score = self.score, ticks = self.tick_count, "game over");
        TickOutcome::Crashed(cause)
    }

    fn add_score(&mut self, pipes_passed: u32) {
        self.score += pipes_passed;
        if self.score > self.high_score {
            self.high_score = self.score;
            info!(high_score = self.high_score, "new high score");
            if let Err(e) = self.store.save(self.high_score) {
                warn!(error = %e, "failed to persist high score");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::{MemoryHighScoreStore, StoreError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FIELD: Playfield = Playfield {
        width: 800.0,
        height: 600.0,
    };

    fn new_session() -> GameSession<MemoryHighScoreStore, StdRng> {
        GameSession::new(
            GameConfig::default(),
            MemoryHighScoreStore::default(),
            StdRng::seed_from_u64(42),
            FIELD,
        )
    }

    /// Gap spans y in [100, 300).
    fn pipe_at(x: f64) -> Pipe {
        Pipe {
            x,
            top_height: 100.0,
            bottom_height: 300.0,
            passed: false,
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = new_session();
        assert_eq!(session.phase(), GamePhase::Idle);
        assert!(session.pipes.is_empty());
        assert_eq!(session.bird, Bird::at_rest(50.0, 600.0));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_first_jump_starts_run() {
        let mut session = new_session();
        assert_eq!(session.jump(FIELD), JumpOutcome::Started);
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.pipes.len(), 1);

        let pipe = session.pipes[0];
        assert_eq!(pipe.x, 800.0);
        assert!(pipe.top_height >= 50.0 && pipe.top_height < 350.0);
        assert!((pipe.bottom_height - (600.0 - pipe.top_height - 200.0)).abs() < 1e-9);
        // Starting does not flap
        assert_eq!(session.bird.velocity, 0.0);
    }

    #[test]
    fn test_jump_while_running_sets_impulse() {
        let mut session = new_session();
        session.jump(FIELD);
        session.bird.velocity = 5.0;
        let y = session.bird.y;

        assert_eq!(session.jump(FIELD), JumpOutcome::Flapped);
        assert_eq!(session.bird.velocity, -8.0);
        assert_eq!(session.bird.y, y);
        assert_eq!(session.pipes.len(), 1);
    }

    #[test]
    fn test_idle_does_not_tick() {
        let mut session = new_session();
        assert_eq!(session.tick(FIELD), TickOutcome::Skipped);
        assert_eq!(session.bird, Bird::at_rest(50.0, 600.0));
        assert_eq!(session.tick_count(), 0);
    }

    #[test]
    fn test_ceiling_ends_run_and_freezes_bird() {
        let mut session = new_session();
        session.jump(FIELD);
        session.bird.y = 0.0;
        session.bird.velocity = -1.0;
        let pipes_before = session.pipes.clone();

        assert_eq!(
            session.tick(FIELD),
            TickOutcome::Crashed(CrashCause::OutOfBounds)
        );
        assert_eq!(session.phase(), GamePhase::Over);
        assert_eq!(session.bird.y, 0.0);
        assert_eq!(session.bird.velocity, -1.0);
        // Pipes don't move on the crash tick
        assert_eq!(session.pipes, pipes_before);
    }

    #[test]
    fn test_over_freezes_everything() {
        let mut session = new_session();
        session.jump(FIELD);
        session.bird.y = 0.0;
        session.bird.velocity = -1.0;
        session.tick(FIELD);

        let bird = session.bird;
        let pipes = session.pipes.clone();
        for _ in 0..10 {
            assert_eq!(session.tick(FIELD), TickOutcome::Skipped);
        }
        assert_eq!(session.jump(FIELD), JumpOutcome::Ignored);
        assert_eq!(session.bird, bird);
        assert_eq!(session.pipes, pipes);
    }

    #[test]
    fn test_pipe_collision_skips_scoring() {
        let mut session = new_session();
        session.jump(FIELD);
        session.bird.y = 20.0;
        // First pipe would be passed this tick, second overlaps the bird above its gap.
        session.pipes = vec![pipe_at(-15.0), pipe_at(40.0), pipe_at(800.0)];

        assert_eq!(session.tick(FIELD), TickOutcome::Crashed(CrashCause::Pipe));
        assert_eq!(session.score(), 0);
        assert!(!session.pipes[0].passed);
    }

    #[test]
    fn test_two_pipes_passed_in_one_tick() {
        let mut session = new_session();
        session.jump(FIELD);
        session.bird.y = 150.0;
        session.pipes = vec![pipe_at(-20.0), pipe_at(-8.0), pipe_at(700.0)];

        assert_eq!(
            session.tick(FIELD),
            TickOutcome::Advanced { pipes_passed: 2 }
        );
        assert_eq!(session.score(), 2);
        assert!(session.pipes[0].passed && session.pipes[1].passed);
    }

    #[test]
    fn test_new_high_score_is_written_through() {
        let mut session = new_session();
        session.jump(FIELD);
        session.bird.y = 150.0;
        session.pipes = vec![pipe_at(-20.0), pipe_at(700.0)];

        session.tick(FIELD);

        assert_eq!(session.high_score(), 1);
        assert_eq!(session.store().best, 1);
        assert_eq!(session.store().writes, 1);
    }

    #[test]
    fn test_lower_score_does_not_touch_store() {
        let mut session = GameSession::new(
            GameConfig::default(),
            MemoryHighScoreStore::with_best(10),
            StdRng::seed_from_u64(1),
            FIELD,
        );
        session.jump(FIELD);
        session.bird.y = 150.0;
        session.pipes = vec![pipe_at(-20.0), pipe_at(700.0)];

        session.tick(FIELD);

        assert_eq!(session.score(), 1);
        assert_eq!(session.high_score(), 10);
        assert_eq!(session.store().writes, 0);
    }

    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn load(&mut self) -> u32 {
            0
        }

        fn save(&mut self, _best: u32) -> Result<(), StoreError> {
            Err(StoreError::NoHomeDir)
        }
    }

    #[test]
    fn test_failed_save_keeps_playing() {
        let mut session = GameSession::new(
            GameConfig::default(),
            BrokenStore,
            StdRng::seed_from_u64(1),
            FIELD,
        );
        session.jump(FIELD);
        session.bird.y = 150.0;
        session.pipes = vec![pipe_at(-20.0), pipe_at(700.0)];

        assert_eq!(
            session.tick(FIELD),
            TickOutcome::Advanced { pipes_passed: 1 }
        );
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.high_score(), 1);
    }

    #[test]
    fn test_reset_only_from_over() {
        let mut session = new_session();
        assert!(!session.reset(FIELD));
        session.jump(FIELD);
        assert!(!session.reset(FIELD));
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_reset_restores_idle_with_new_height() {
        let mut session = new_session();
        session.jump(FIELD);
        session.bird.y = 150.0;
        session.pipes = vec![pipe_at(-20.0), pipe_at(700.0)];
        session.tick(FIELD);
        session.bird.y = 0.0;
        session.bird.velocity = -1.0;
        session.tick(FIELD);
        assert_eq!(session.phase(), GamePhase::Over);

        let resized = Playfield::new(500.0, 400.0);
        assert!(session.reset(resized));
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.bird, Bird::at_rest(50.0, 400.0));
        assert!(session.pipes.is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 1);
        assert_eq!(session.tick_count(), 0);
    }
}
