//! Data model shared by the simulation units.

/// Playfield dimensions in logical units.
///
/// Owned by the presentation layer and passed into every session operation,
/// so a resize between runs shows up in the next call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first jump. No pipes, bird at rest.
    Idle,
    /// Tick loop active.
    Running,
    /// Run ended; the last bird/pipe snapshot is kept for display.
    Over,
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Over => "Over",
        }
    }
}

/// The player's bird. Horizontal position never changes during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f64,
    /// Top edge, growing downward from the ceiling.
    pub y: f64,
    /// Signed vertical speed (negative = upward).
    pub velocity: f64,
}

impl Bird {
    /// Bird at rest, vertically centred in a playfield of the given height.
    pub fn at_rest(x: f64, playfield_height: f64) -> Self {
        Self {
            x,
            y: playfield_height / 2.0,
            velocity: 0.0,
        }
    }
}

/// A gap-pipe: a top and a bottom segment with a fixed opening between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge, decreasing every tick.
    pub x: f64,
    pub top_height: f64,
    pub bottom_height: f64,
    /// Set once the bird has fully cleared this pipe.
    pub passed: bool,
}

impl Pipe {
    /// Y coordinate where the bottom segment starts.
    pub fn gap_bottom(&self, playfield_height: f64) -> f64 {
        playfield_height - self.bottom_height
    }
}
