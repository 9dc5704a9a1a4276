//! Pipe generator: scrolling, retiring and spawning gap-pipes.

use super::config::GameConfig;
use super::types::{Pipe, Playfield};
use rand::Rng;
use tracing::debug;

/// What a generator pass did, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeUpdate {
    pub retired: usize,
    pub spawned: bool,
}

/// Draw a top segment height uniformly from
/// `[min_top_height, min_top_height + height - gap_size - bottom_margin)`.
///
/// A playfield too short for that range gets a centred gap instead.
pub fn random_top_height<R: Rng>(rng: &mut R, playfield_height: f64, config: &GameConfig) -> f64 {
    let span = playfield_height - config.gap_size - config.bottom_margin;
    if span > 0.0 {
        let low = config.min_top_height;
        rng.gen_range(low..low + span)
    } else {
        ((playfield_height - config.gap_size) / 2.0).max(0.0)
    }
}

/// A fresh pipe at the right edge of the playfield.
pub fn spawn_pipe<R: Rng>(rng: &mut R, field: Playfield, config: &GameConfig) -> Pipe {
    let top_height = random_top_height(rng, field.height, config);
    Pipe {
        x: field.width,
        top_height,
        bottom_height: field.height - top_height - config.gap_size,
        passed: false,
    }
}

/// One generator pass: scroll left, drop pipes that are fully off-screen,
/// then spawn at the right edge if the newest pipe has moved far enough
/// (or there are no pipes at all).
pub fn advance_pipes<R: Rng>(
    pipes: &mut Vec<Pipe>,
    rng: &mut R,
    field: Playfield,
    config: &GameConfig,
) -> PipeUpdate {
    for pipe in pipes.iter_mut() {
        pipe.x -= config.pipe_speed;
    }

    let before = pipes.len();
    pipes.retain(|p| p.x > -config.pipe_width);
    let retired = before - pipes.len();
    if retired > 0 {
        debug!(retired, "retired off-screen pipes");
    }

    let needs_pipe = match pipes.last() {
        None => true,
        Some(newest) => newest.x < field.width - config.spawn_threshold,
    };
    if needs_pipe {
        let pipe = spawn_pipe(rng, field, config);
        debug!(top = pipe.top_height, bottom = pipe.bottom_height, "spawned pipe");
        pipes.push(pipe);
    }

    PipeUpdate {
        retired,
        spawned: needs_pipe,
    }
}
