use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use asteroid_shooter::compute::{init_state, resolve_collisions, tick};
use asteroid_shooter::config::SimConfig;
use asteroid_shooter::entities::{GameState, Obstacle, Projectile};
use asteroid_shooter::input::TickInput;

fn any_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(left, right, fire)| TickInput { left, right, fire })
}

proptest! {
    #[test]
    fn player_stays_inside_viewport(
        inputs in prop::collection::vec(any_input(), 1..400),
        speed in 0.5f64..60.0,
        seed in any::<u64>(),
    ) {
        let config = SimConfig { player_speed: speed, ..SimConfig::default() };
        let max_x = config.player_max_x();
        let mut state = init_state(config);
        let mut rng = StdRng::seed_from_u64(seed);
        for (i, input) in inputs.iter().enumerate() {
            state = tick(&state, input, i as f64 / 60.0, &mut rng);
            prop_assert!(state.player.x >= 0.0 && state.player.x <= max_x);
        }
    }

    #[test]
    fn score_never_decreases_and_entities_stay_live(
        inputs in prop::collection::vec(any_input(), 1..400),
        seed in any::<u64>(),
    ) {
        let config = SimConfig { obstacle_spawn_probability: 0.3, ..SimConfig::default() };
        let mut state = init_state(config);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut last_score = 0;
        for (i, input) in inputs.iter().enumerate() {
            state = tick(&state, input, i as f64 / 20.0, &mut rng);
            prop_assert!(state.score >= last_score);
            last_score = state.score;
            prop_assert!(state.projectiles.iter().all(|p| p.y >= 0.0 && p.y.is_finite()));
            prop_assert!(state.obstacles.iter().all(|o| o.y <= 600.0 && o.x.is_finite()));
        }
    }

    #[test]
    fn each_hit_removes_exactly_one_of_each(
        obstacles in prop::collection::vec((0.0f64..400.0, 0.0f64..400.0), 0..12),
        projectiles in prop::collection::vec((0.0f64..400.0, 0.0f64..400.0), 0..12),
    ) {
        let state = GameState {
            obstacles: obstacles
                .iter()
                .map(|&(x, y)| Obstacle { x, y, width: 40.0, height: 40.0, variant: 0 })
                .collect(),
            projectiles: projectiles
                .iter()
                .map(|&(x, y)| Projectile { x, y, width: 10.0, height: 20.0 })
                .collect(),
            ..init_state(SimConfig::default())
        };

        let after = resolve_collisions(&state);
        let hits = after.score - state.score;
        prop_assert_eq!(after.obstacles.len() + hits as usize, obstacles.len());
        prop_assert_eq!(after.projectiles.len() + hits as usize, projectiles.len());

        // Nothing that survived can still be paired up.
        for o in &after.obstacles {
            for p in &after.projectiles {
                prop_assert!(!o.bounds().overlaps(&p.bounds()));
            }
        }
    }
}
