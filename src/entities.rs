/// All game entity types — pure data, no logic beyond geometry helpers.

use crate::config::SimConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in viewport units, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Open-interval overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal movement per tick.
    pub speed: f64,
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player shot travelling straight up.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Projectile {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// A falling asteroid.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Which look the renderer should use.  Never read by the simulation.
    pub variant: u8,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state.  The renderer only ever borrows it.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: SimConfig,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub obstacles: Vec<Obstacle>,
    /// One point per obstacle destroyed by a projectile.
    pub score: u32,
    /// Clock reading of the last accepted shot, `None` before the first one.
    pub last_fire: Option<f64>,
    /// Number of completed ticks.
    pub frame: u64,
}

impl GameState {
    pub fn viewport_width(&self) -> f64 {
        self.config.viewport_width as f64
    }

    pub fn viewport_height(&self) -> f64 {
        self.config.viewport_height as f64
    }
}
