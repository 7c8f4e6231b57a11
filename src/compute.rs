/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, a clock reading or an RNG handle) and
/// returns a brand-new `GameState`.  Side effects are limited to the injected
/// RNG, so callers control determinism (tests use a seeded RNG and
/// hand-picked clock values).

use rand::Rng;

use crate::config::SimConfig;
use crate::entities::{GameState, Obstacle, Player, Projectile, Rect};
use crate::input::TickInput;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state.  The ship starts horizontally centred near
/// the bottom edge with nothing else on screen.
///
/// `config` must already pass [`SimConfig::validate`]; spawning relies on a
/// non-empty viewport and at least one obstacle variant.
pub fn init_state(config: SimConfig) -> GameState {
    debug_assert!(
        config.validate().is_ok(),
        "init_state needs a validated SimConfig"
    );
    let width = config.player_width();
    let height = config.player_height();
    let x = (config.viewport_width as f64 / 2.0).clamp(0.0, config.player_max_x());
    let y = config.viewport_height as f64 - config.player_bottom_offset;

    GameState {
        player: Player {
            x,
            y,
            width,
            height,
            speed: config.player_speed,
        },
        projectiles: Vec::new(),
        obstacles: Vec::new(),
        score: 0,
        last_fire: None,
        frame: 0,
        config,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

fn nudge_player(state: &GameState, dx: f64) -> GameState {
    let new_x = (state.player.x + dx).clamp(0.0, state.config.player_max_x());
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_left(state: &GameState) -> GameState {
    nudge_player(state, -state.player.speed)
}

pub fn move_player_right(state: &GameState) -> GameState {
    nudge_player(state, state.player.speed)
}

/// Apply held movement keys.  Holding both directions leaves the ship where
/// it is.
pub fn apply_movement(state: &GameState, input: &TickInput) -> GameState {
    match input.horizontal() {
        -1 => move_player_left(state),
        1 => move_player_right(state),
        _ => state.clone(),
    }
}

/// Fire one projectile from the ship's muzzle, but only if the cooldown has
/// elapsed since the last accepted shot.
pub fn player_shoot(state: &GameState, now: f64) -> GameState {
    let ready = match state.last_fire {
        None => true,
        Some(last) => now - last >= state.config.fire_cooldown_secs,
    };
    if !ready {
        return state.clone();
    }

    let new_projectile = Projectile {
        x: state.player.x + state.config.muzzle_offset,
        y: state.player.y,
        width: state.config.projectile_width,
        height: state.config.projectile_height,
    };
    let mut projectiles = state.projectiles.clone();
    projectiles.push(new_projectile);
    GameState {
        projectiles,
        last_fire: Some(now),
        ..state.clone()
    }
}

// ── Per-tick movement and spawning ──────────────────────────────────────────

/// Move every projectile up, dropping the ones that left through the top.
pub fn advance_projectiles(state: &GameState) -> GameState {
    let speed = state.config.bullet_speed;
    let projectiles: Vec<Projectile> = state
        .projectiles
        .iter()
        .filter_map(|p| {
            let new_y = p.y - speed;
            if new_y < 0.0 {
                None
            } else {
                Some(Projectile { y: new_y, ..p.clone() })
            }
        })
        .collect();
    GameState {
        projectiles,
        ..state.clone()
    }
}

/// Move every obstacle down, dropping the ones that left through the bottom.
pub fn advance_obstacles(state: &GameState) -> GameState {
    let speed = state.config.obstacle_speed;
    let bottom = state.viewport_height();
    let obstacles: Vec<Obstacle> = state
        .obstacles
        .iter()
        .filter_map(|o| {
            let new_y = o.y + speed;
            if new_y > bottom {
                None
            } else {
                Some(Obstacle { y: new_y, ..o.clone() })
            }
        })
        .collect();
    GameState {
        obstacles,
        ..state.clone()
    }
}

/// Roll the per-tick spawn chance and, on success, drop a new obstacle in at
/// the top edge at a random column.
pub fn maybe_spawn_obstacle(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !rng.gen_bool(state.config.obstacle_spawn_probability) {
        return state.clone();
    }

    let x = rng.gen_range(0..state.config.viewport_width) as f64;
    let variant = rng.gen_range(0..state.config.obstacle_variants);
    log::debug!("frame {}: obstacle spawned at x={x}", state.frame);

    let mut obstacles = state.obstacles.clone();
    obstacles.push(Obstacle {
        x,
        y: 0.0,
        width: state.config.obstacle_width,
        height: state.config.obstacle_height,
        variant,
    });
    GameState {
        obstacles,
        ..state.clone()
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Pair up obstacles and projectiles, destroying both halves of every pair
/// and scoring one point per pair.
///
/// Obstacles are scanned in order; each takes the first still-unused
/// projectile that overlaps it.  A projectile is consumed by at most one
/// obstacle, but one that found no partner stays available to the
/// obstacles after it.
pub fn resolve_collisions(state: &GameState) -> GameState {
    // Bounds are computed once; the scan below only reads these.
    let obstacle_bounds: Vec<Rect> = state.obstacles.iter().map(Obstacle::bounds).collect();
    let projectile_bounds: Vec<Rect> = state.projectiles.iter().map(Projectile::bounds).collect();

    let mut killed_obstacles = vec![false; obstacle_bounds.len()];
    let mut used_projectiles = vec![false; projectile_bounds.len()];
    let mut hits: u32 = 0;

    for (oi, obstacle) in obstacle_bounds.iter().enumerate() {
        let partner = (0..projectile_bounds.len())
            .find(|&pi| !used_projectiles[pi] && obstacle.overlaps(&projectile_bounds[pi]));
        if let Some(pi) = partner {
            killed_obstacles[oi] = true;
            used_projectiles[pi] = true;
            hits += 1;
        }
    }

    if hits == 0 {
        return state.clone();
    }

    let obstacles: Vec<Obstacle> = state
        .obstacles
        .iter()
        .zip(&killed_obstacles)
        .filter(|(_, &killed)| !killed)
        .map(|(o, _)| o.clone())
        .collect();

    let projectiles: Vec<Projectile> = state
        .projectiles
        .iter()
        .zip(&used_projectiles)
        .filter(|(_, &used)| !used)
        .map(|(p, _)| p.clone())
        .collect();

    let score = state.score.saturating_add(hits);
    log::debug!("frame {}: {hits} obstacle(s) destroyed, score {score}", state.frame);

    GameState {
        obstacles,
        projectiles,
        score,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure: RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.
///
/// `now` is a clock reading in seconds and only gates firing; everything else
/// moves a fixed amount per call.  All randomness comes through `rng`.
pub fn tick(state: &GameState, input: &TickInput, now: f64, rng: &mut impl Rng) -> GameState {
    // ── 1. Move the ship ─────────────────────────────────────────────────────
    let state = apply_movement(state, input);

    // ── 2. Fire ──────────────────────────────────────────────────────────────
    let state = if input.fire {
        player_shoot(&state, now)
    } else {
        state
    };

    // ── 3. Projectiles up, cull the top edge ─────────────────────────────────
    let state = advance_projectiles(&state);

    // ── 4. Maybe spawn an obstacle ───────────────────────────────────────────
    let state = maybe_spawn_obstacle(&state, rng);

    // ── 5. Obstacles down, cull the bottom edge ──────────────────────────────
    let state = advance_obstacles(&state);

    // ── 6. Projectiles ↔ obstacles ───────────────────────────────────────────
    let state = resolve_collisions(&state);

    let frame = state.frame + 1;
    log::trace!(
        "frame {frame}: player x={:.1}, {} projectile(s), {} obstacle(s)",
        state.player.x,
        state.projectiles.len(),
        state.obstacles.len()
    );

    GameState { frame, ..state }
}
