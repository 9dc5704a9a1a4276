//! Physics unit: gravity, jump impulse and boundary checks for the bird.

use super::config::GameConfig;
use super::types::Bird;

/// Result of advancing the bird by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsStep {
    /// New position committed.
    Moved,
    /// The step would leave the playfield. The bird was left untouched.
    OutOfBounds,
}

/// Advance the bird by one tick.
///
/// Position integrates the pre-step velocity, then gravity is added. If the
/// new position touches the ceiling or floor the bird keeps its pre-step
/// values, so the last valid position is what gets displayed.
pub fn step_bird(bird: &mut Bird, playfield_height: f64, config: &GameConfig) -> PhysicsStep {
    let new_y = bird.y + bird.velocity;
    let new_velocity = bird.velocity + config.gravity;

    if new_y <= 0.0 || new_y >= playfield_height - config.bird_height {
        return PhysicsStep::OutOfBounds;
    }

    bird.y = new_y;
    bird.velocity = new_velocity;
    PhysicsStep::Moved
}

/// Override the velocity with the jump impulse. Position is unchanged.
pub fn apply_jump(bird: &mut Bird, config: &GameConfig) {
    bird.velocity = config.jump_impulse;
}

/// Display tilt in degrees (negative = nose up), clamped to the max angle.
pub fn tilt_degrees(velocity: f64, max_tilt: f64) -> f64 {
    (velocity * super::constants::TILT_PER_VELOCITY).clamp(-max_tilt, max_tilt)
}
