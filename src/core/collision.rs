//! Collision and scoring checks between the bird and the pipe sequence.

use super::config::GameConfig;
use super::types::{Bird, Pipe};

/// True if the bird is inside the pipe's column and outside its gap.
///
/// Horizontal spans are half-open: `[x, x + width)`.
pub fn hits_pipe(bird: &Bird, pipe: &Pipe, playfield_height: f64, config: &GameConfig) -> bool {
    let overlaps_column =
        bird.x < pipe.x + config.pipe_width && bird.x + config.bird_width > pipe.x;
    if !overlaps_column {
        return false;
    }

    let bird_top = bird.y;
    let bird_bottom = bird.y + config.bird_height;
    bird_top < pipe.top_height || bird_bottom > pipe.gap_bottom(playfield_height)
}

/// Index of the first pipe the bird hits, in sequence order.
pub fn find_collision(
    bird: &Bird,
    pipes: &[Pipe],
    playfield_height: f64,
    config: &GameConfig,
) -> Option<usize> {
    pipes
        .iter()
        .position(|pipe| hits_pipe(bird, pipe, playfield_height, config))
}

/// Mark every pipe the bird has fully cleared and return how many were newly
/// passed. Counts all of them, so a skipped tick cannot lose points.
pub fn mark_passed(bird: &Bird, pipes: &mut [Pipe], config: &GameConfig) -> u32 {
    let mut newly_passed = 0;
    for pipe in pipes.iter_mut().filter(|p| !p.passed) {
        if bird.x > pipe.x + config.pipe_width {
            pipe.passed = true;
            newly_passed += 1;
        }
    }
    newly_passed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(y: f64) -> Bird {
        Bird {
            x: 50.0,
            y,
            velocity: 0.0,
        }
    }

    /// Gap spans y in [100, 300) on a 600-high playfield.
    fn pipe_at(x: f64) -> Pipe {
        Pipe {
            x,
            top_height: 100.0,
            bottom_height: 300.0,
            passed: false,
        }
    }

    #[test]
    fn test_bird_in_gap_is_safe() {
        let config = GameConfig::default();
        assert!(!hits_pipe(&bird_at(150.0), &pipe_at(40.0), 600.0, &config));
    }

    #[test]
    fn test_bird_above_gap_collides() {
        let config = GameConfig::default();
        assert!(hits_pipe(&bird_at(99.0), &pipe_at(40.0), 600.0, &config));
    }

    #[test]
    fn test_bird_below_gap_collides() {
        let config = GameConfig::default();
        // bottom edge 277 + 24 = 301 > 300
        assert!(hits_pipe(&bird_at(277.0), &pipe_at(40.0), 600.0, &config));
        // bottom edge exactly on the segment is still inside the gap
        assert!(!hits_pipe(&bird_at(276.0), &pipe_at(40.0), 600.0, &config));
    }

    #[test]
    fn test_column_edges_are_half_open() {
        let config = GameConfig::default();
        let bird = bird_at(0.5);
        // Pipe starts exactly where the bird ends: 50 + 34 = 84
        assert!(!hits_pipe(&bird, &pipe_at(84.0), 600.0, &config));
        assert!(hits_pipe(&bird, &pipe_at(83.9), 600.0, &config));
        // Pipe ends exactly where the bird starts: -10 + 60 = 50
        assert!(!hits_pipe(&bird, &pipe_at(-10.0), 600.0, &config));
        assert!(hits_pipe(&bird, &pipe_at(-9.9), 600.0, &config));
    }

    #[test]
    fn test_find_collision_reports_first_hit() {
        let config = GameConfig::default();
        let pipes = [pipe_at(300.0), pipe_at(40.0), pipe_at(60.0)];
        assert_eq!(find_collision(&bird_at(10.0), &pipes, 600.0, &config), Some(1));
        assert_eq!(find_collision(&bird_at(150.0), &pipes, 600.0, &config), None);
    }

    #[test]
    fn test_pass_requires_full_clearance() {
        let config = GameConfig::default();
        // 50 > -10 + 60 is false
        let mut pipes = [pipe_at(-10.0)];
        assert_eq!(mark_passed(&bird_at(150.0), &mut pipes, &config), 0);
        assert!(!pipes[0].passed);

        pipes[0].x = -10.5;
        assert_eq!(mark_passed(&bird_at(150.0), &mut pipes, &config), 1);
        assert!(pipes[0].passed);
    }

    #[test]
    fn test_pipe_is_counted_once() {
        let config = GameConfig::default();
        let mut pipes = [pipe_at(-20.0)];
        assert_eq!(mark_passed(&bird_at(150.0), &mut pipes, &config), 1);
        assert_eq!(mark_passed(&bird_at(150.0), &mut pipes, &config), 0);
    }

    #[test]
    fn test_two_pipes_passed_in_one_tick() {
        let config = GameConfig::default();
        let mut pipes = [pipe_at(-30.0), pipe_at(-15.0), pipe_at(200.0)];
        assert_eq!(mark_passed(&bird_at(150.0), &mut pipes, &config), 2);
        assert!(pipes[0].passed && pipes[1].passed);
        assert!(!pipes[2].passed);
    }
}
