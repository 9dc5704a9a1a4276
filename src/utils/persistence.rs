//! High score persistence under ~/.skyward/.
//!
//! The session only sees the [`HighScoreStore`] port: `load` once at startup,
//! `save` on every new maximum. Loading never fails; anything unreadable
//! counts as a best score of 0 so a corrupt file can't block a run.

use crate::core::constants::{DATA_DIR_NAME, HIGH_SCORE_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Errors from writing the high score.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("high score I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value port for the best score ever recorded.
pub trait HighScoreStore {
    /// Best score on record, or 0 if there is none or it can't be read.
    fn load(&mut self) -> u32;
    /// Record a new best score.
    fn save(&mut self, best: u32) -> Result<(), StoreError>;
}

impl<T: HighScoreStore + ?Sized> HighScoreStore for Box<T> {
    fn load(&mut self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, best: u32) -> Result<(), StoreError> {
        (**self).save(best)
    }
}

/// Get the ~/.skyward/ directory path, creating it if needed.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let home_dir = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    best_score: u32,
}

/// Parse a stored high score. Accepts the JSON record or a bare number.
fn parse_high_score(contents: &str) -> Option<u32> {
    if let Ok(record) = serde_json::from_str::<HighScoreRecord>(contents) {
        return Some(record.best_score);
    }
    contents.trim().parse().ok()
}

/// High score kept as a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.skyward/highscore.json`.
    pub fn in_data_dir() -> Result<Self, StoreError> {
        Ok(Self::at(data_dir()?.join(HIGH_SCORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn load(&mut self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no stored high score");
                return 0;
            }
        };
        match parse_high_score(&contents) {
            Some(best) => best,
            None => {
                warn!(path = %self.path.display(), "stored high score is malformed, treating as 0");
                0
            }
        }
    }

    fn save(&mut self, best: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&HighScoreRecord { best_score: best })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-process store for the simulator and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    pub best: u32,
    /// Number of successful `save` calls.
    pub writes: u32,
}

impl MemoryHighScoreStore {
    pub fn with_best(best: u32) -> Self {
        Self { best, writes: 0 }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&mut self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) -> Result<(), StoreError> {
        self.best = best;
        self.writes += 1;
        Ok(())
    }
}
