/// Simulation tuning constants.
///
/// Everything the simulation needs to know about the playfield lives in one
/// `SimConfig` value that is validated once at startup.  The renderer reads
/// the same viewport so clamping, culling and layout always agree.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;
pub const DEFAULT_PLAYER_SPEED: f64 = 5.0;
pub const DEFAULT_BULLET_SPEED: f64 = 7.0;
pub const DEFAULT_OBSTACLE_SPEED: f64 = 3.0;
pub const DEFAULT_FIRE_COOLDOWN_SECS: f64 = 0.25;
pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.02;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Horizontal player movement per tick.
    pub player_speed: f64,
    /// Upward projectile movement per tick.
    pub bullet_speed: f64,
    /// Downward obstacle movement per tick.
    pub obstacle_speed: f64,
    /// Minimum wall-clock gap between two shots.
    pub fire_cooldown_secs: f64,
    /// Chance per tick that a new obstacle appears.
    pub obstacle_spawn_probability: f64,
    /// Ship size as a fraction of the viewport.
    pub player_width_fraction: f64,
    pub player_height_fraction: f64,
    /// Distance from the bottom edge to the ship's top edge.
    pub player_bottom_offset: f64,
    pub projectile_width: f64,
    pub projectile_height: f64,
    pub obstacle_width: f64,
    pub obstacle_height: f64,
    /// Horizontal offset from the ship's left edge to a new projectile.
    pub muzzle_offset: f64,
    /// Number of obstacle looks the renderer can choose from.
    pub obstacle_variants: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            player_speed: DEFAULT_PLAYER_SPEED,
            bullet_speed: DEFAULT_BULLET_SPEED,
            obstacle_speed: DEFAULT_OBSTACLE_SPEED,
            fire_cooldown_secs: DEFAULT_FIRE_COOLDOWN_SECS,
            obstacle_spawn_probability: DEFAULT_SPAWN_PROBABILITY,
            player_width_fraction: 0.1,
            player_height_fraction: 0.1,
            player_bottom_offset: 70.0,
            projectile_width: 10.0,
            projectile_height: 20.0,
            obstacle_width: 40.0,
            obstacle_height: 40.0,
            muzzle_offset: 35.0,
            obstacle_variants: 4,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document.  Missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&json)
    }

    pub fn player_width(&self) -> f64 {
        self.viewport_width as f64 * self.player_width_fraction
    }

    pub fn player_height(&self) -> f64 {
        self.viewport_height as f64 * self.player_height_fraction
    }

    /// Largest x the ship's left edge may take.
    pub fn player_max_x(&self) -> f64 {
        (self.viewport_width as f64 - self.player_width()).max(0.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width == 0 {
            return Err(ConfigError::NonPositive { field: "viewport_width" });
        }
        if self.viewport_height == 0 {
            return Err(ConfigError::NonPositive { field: "viewport_height" });
        }

        let positive: [(&'static str, f64); 7] = [
            ("player_speed", self.player_speed),
            ("bullet_speed", self.bullet_speed),
            ("obstacle_speed", self.obstacle_speed),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field });
            }
        }

        let finite: [(&'static str, f64); 5] = [
            ("fire_cooldown_secs", self.fire_cooldown_secs),
            ("player_width_fraction", self.player_width_fraction),
            ("player_height_fraction", self.player_height_fraction),
            ("player_bottom_offset", self.player_bottom_offset),
            ("muzzle_offset", self.muzzle_offset),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }
        if self.fire_cooldown_secs < 0.0 {
            return Err(ConfigError::Negative { field: "fire_cooldown_secs" });
        }

        let p = self.obstacle_spawn_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ProbabilityOutOfRange { value: p });
        }

        for (field, value) in [
            ("player_width_fraction", self.player_width_fraction),
            ("player_height_fraction", self.player_height_fraction),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(ConfigError::FractionOutOfRange { field, value });
            }
        }

        if self.obstacle_variants == 0 {
            return Err(ConfigError::NoVariants);
        }
        Ok(())
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    NonPositive { field: &'static str },
    Negative { field: &'static str },
    NotFinite { field: &'static str },
    ProbabilityOutOfRange { value: f64 },
    FractionOutOfRange { field: &'static str, value: f64 },
    NoVariants,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed reading config: {err}"),
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::NonPositive { field } => write!(f, "{field} must be positive"),
            Self::Negative { field } => write!(f, "{field} must not be negative"),
            Self::NotFinite { field } => write!(f, "{field} must be a finite number"),
            Self::ProbabilityOutOfRange { value } => {
                write!(f, "obstacle_spawn_probability must be in 0..=1, got {value}")
            }
            Self::FractionOutOfRange { field, value } => {
                write!(f, "{field} must be in (0, 1], got {value}")
            }
            Self::NoVariants => write!(f, "obstacle_variants must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}
