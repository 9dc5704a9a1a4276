//! A simple gap-tracking autopilot used by the simulator.

use crate::core::session::SessionView;
use crate::core::types::Playfield;

/// How far above a gap's bottom edge the autopilot keeps the bird's feet.
pub const GAP_BOTTOM_MARGIN: f64 = 20.0;

/// Jump whenever the bird's bottom edge sinks below the target line: just
/// above the bottom of the next uncleared pipe's gap, or mid-field when no
/// pipe is ahead.
pub fn should_jump(view: &SessionView<'_>, field: Playfield) -> bool {
    let config = view.config;
    let bird = view.bird;

    let target_line = view
        .pipes
        .iter()
        .find(|p| p.x + config.pipe_width >= bird.x)
        .map(|p| p.gap_bottom(field.height) - GAP_BOTTOM_MARGIN)
        .unwrap_or(field.height / 2.0);

    bird.y + config.bird_height > target_line
}
