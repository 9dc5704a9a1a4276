//! Skyward - terminal gap-pipe arcade game.
//!
//! The library holds the simulation (bird physics, pipe generation,
//! collision/scoring and the session state machine), high score
//! persistence, logging setup and the headless simulator. The terminal
//! front end lives in the binary.

pub mod build_info;
pub mod core;
pub mod simulator;
pub mod utils;

pub use crate::core::{
    Bird, ConfigError, CrashCause, Driver, GameConfig, GamePhase, GameSession, JumpOutcome, Pipe,
    Playfield, Presenter, SessionView, TickClock, TickOutcome,
};
pub use crate::utils::persistence::{
    HighScoreStore, JsonHighScoreStore, MemoryHighScoreStore, StoreError,
};
