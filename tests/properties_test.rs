//! Property tests for the simulation invariants.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skyward::core::collision::mark_passed;
use skyward::core::physics::{step_bird, PhysicsStep};
use skyward::core::pipes::{advance_pipes, spawn_pipe};
use skyward::{
    Bird, GameConfig, GamePhase, GameSession, MemoryHighScoreStore, Pipe, Playfield, TickOutcome,
};

proptest! {
    #[test]
    fn spawned_pipes_fill_the_playfield(
        seed in any::<u64>(),
        width in 200.0f64..2000.0,
        height in 320.0f64..1500.0,
    ) {
        let config = GameConfig::default();
        let field = Playfield::new(width, height);
        let mut rng = StdRng::seed_from_u64(seed);

        let pipe = spawn_pipe(&mut rng, field, &config);

        prop_assert_eq!(pipe.x, width);
        prop_assert!(!pipe.passed);
        prop_assert!(pipe.top_height >= config.min_top_height);
        prop_assert!(pipe.top_height < height - config.gap_size - config.bottom_margin + config.min_top_height);
        let total = pipe.top_height + config.gap_size + pipe.bottom_height;
        prop_assert!((total - height).abs() < 1e-6);
    }

    #[test]
    fn in_bounds_step_adds_gravity(y in 1.0f64..500.0, velocity in -10.0f64..10.0) {
        let config = GameConfig::default();
        let mut bird = Bird { x: 50.0, y, velocity };
        let before = bird;

        match step_bird(&mut bird, 600.0, &config) {
            PhysicsStep::Moved => {
                prop_assert!((bird.y - (y + velocity)).abs() < 1e-9);
                prop_assert!((bird.velocity - (velocity + config.gravity)).abs() < 1e-9);
            }
            PhysicsStep::OutOfBounds => prop_assert_eq!(bird, before),
        }
    }

    #[test]
    fn pipes_pass_once_and_only_when_cleared(
        xs in prop::collection::vec(-200.0f64..200.0, 1..8),
        bird_x in 0.0f64..150.0,
    ) {
        let config = GameConfig::default();
        let bird = Bird { x: bird_x, y: 200.0, velocity: 0.0 };
        let mut pipes: Vec<Pipe> = xs
            .iter()
            .map(|&x| Pipe { x, top_height: 100.0, bottom_height: 300.0, passed: false })
            .collect();

        let first = mark_passed(&bird, &mut pipes, &config);
        let expected = xs.iter().filter(|&&x| bird_x > x + config.pipe_width).count() as u32;
        prop_assert_eq!(first, expected);
        for pipe in &pipes {
            prop_assert_eq!(pipe.passed, bird_x > pipe.x + config.pipe_width);
        }
        prop_assert_eq!(mark_passed(&bird, &mut pipes, &config), 0);
    }

    #[test]
    fn generator_keeps_spatial_order_and_never_runs_dry(seed in any::<u64>(), ticks in 1usize..600) {
        let config = GameConfig::default();
        let field = Playfield::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pipes = Vec::new();

        for _ in 0..ticks {
            advance_pipes(&mut pipes, &mut rng, field, &config);
            prop_assert!(!pipes.is_empty());
            prop_assert!(pipes.iter().all(|p| p.x > -config.pipe_width));
            for pair in pipes.windows(2) {
                prop_assert!(pair[0].x < pair[1].x);
            }
        }
    }

    #[test]
    fn high_score_never_decreases(seed in any::<u64>(), jumps in prop::collection::vec(any::<bool>(), 1..400)) {
        let field = Playfield::new(800.0, 600.0);
        let mut session = GameSession::new(
            GameConfig::default(),
            MemoryHighScoreStore::default(),
            StdRng::seed_from_u64(seed),
            field,
        );

        let mut previous_high = session.high_score();
        let mut previous_score = session.score();
        for flap in jumps {
            if flap {
                session.jump(field);
            }
            let outcome = session.tick(field);
            if session.phase() == GamePhase::Over {
                session.reset(field);
                previous_score = 0;
            } else if let TickOutcome::Advanced { pipes_passed } = outcome {
                prop_assert_eq!(session.score(), previous_score + pipes_passed);
                previous_score = session.score();
            }
            prop_assert!(session.high_score() >= previous_high);
            prop_assert!(session.high_score() >= session.score());
            previous_high = session.high_score();
        }
    }
}
