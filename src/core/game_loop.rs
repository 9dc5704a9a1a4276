//! Fixed-step driving of a [`GameSession`].
//!
//! [`TickClock`] turns wall-clock time into a count of due ticks, and
//! [`Driver`] forwards ticks and jumps to the session, rendering through a
//! [`Presenter`] after every call that changed something. The playfield
//! handed in with the starting jump is pinned until the next reset, so a
//! resize only takes effect between runs.

use super::constants::MAX_CATCHUP_TICKS;
use super::session::{GameSession, JumpOutcome, SessionView, TickOutcome};
use super::types::Playfield;
use crate::utils::persistence::HighScoreStore;
use rand::Rng;
use std::time::Duration;

/// Fixed-cadence tick accumulator.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms.max(1)),
            accumulated: Duration::ZERO,
        }
    }

    /// Add elapsed wall time and return how many ticks are due.
    ///
    /// At most `MAX_CATCHUP_TICKS` are returned; time beyond that is dropped
    /// so a long stall doesn't replay seconds of simulation at once.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let due = (self.accumulated.as_nanos() / self.interval.as_nanos()) as u64;
        if due >= MAX_CATCHUP_TICKS as u64 {
            self.accumulated = Duration::ZERO;
            return MAX_CATCHUP_TICKS;
        }
        self.accumulated -= self.interval * due as u32;
        due as u32
    }

    /// Time left before the next tick is due.
    pub fn until_next_tick(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Observes the session after each mutation. Never feeds back into it.
pub trait Presenter {
    type Error;
    fn render(&mut self, view: &SessionView<'_>) -> Result<(), Self::Error>;
}

/// Owns a session and its presenter and sequences every event into
/// "mutate, then render".
pub struct Driver<S, R, P> {
    session: GameSession<S, R>,
    presenter: P,
    run_field: Option<Playfield>,
}

impl<S: HighScoreStore, R: Rng, P: Presenter> Driver<S, R, P> {
    pub fn new(session: GameSession<S, R>, presenter: P) -> Self {
        Self {
            session,
            presenter,
            run_field: None,
        }
    }

    pub fn session(&self) -> &GameSession<S, R> {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Playfield of the current or just-ended run, if one was started.
    pub fn run_field(&self) -> Option<Playfield> {
        self.run_field
    }

    fn field_for(&self, live: Playfield) -> Playfield {
        self.run_field.unwrap_or(live)
    }

    pub fn on_tick(&mut self, field: Playfield) -> Result<TickOutcome, P::Error> {
        let outcome = self.session.tick(self.field_for(field));
        if outcome != TickOutcome::Skipped {
            self.refresh()?;
        }
        Ok(outcome)
    }

    pub fn on_jump(&mut self, field: Playfield) -> Result<JumpOutcome, P::Error> {
        let field = self.field_for(field);
        let outcome = self.session.jump(field);
        if outcome == JumpOutcome::Started {
            self.run_field = Some(field);
        }
        if outcome != JumpOutcome::Ignored {
            self.refresh()?;
        }
        Ok(outcome)
    }

    pub fn on_reset(&mut self, field: Playfield) -> Result<bool, P::Error> {
        let reset = self.session.reset(field);
        if reset {
            self.run_field = None;
            self.refresh()?;
        }
        Ok(reset)
    }

    /// Render the current state without changing it (startup, resize).
    pub fn refresh(&mut self) -> Result<(), P::Error> {
        self.presenter.render(&self.session.view())
    }
}
