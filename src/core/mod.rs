//! Simulation core: physics, pipe generation, collision/scoring and the
//! session state machine that ties them together.

pub mod collision;
pub mod config;
pub mod constants;
pub mod game_loop;
pub mod physics;
pub mod pipes;
pub mod session;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use game_loop::{Driver, Presenter, TickClock};
pub use session::{CrashCause, GameSession, JumpOutcome, SessionView, TickOutcome};
pub use types::{Bird, GamePhase, Pipe, Playfield};
