//! Asteroid Shooter - a 2D arcade shooter simulation.
//!
//! - `entities`: pure data (player, projectiles, obstacles, game state)
//! - `compute`: per-tick simulation (movement, firing, spawning, collisions)
//! - `config`: tunable constants with JSON loading and validation
//! - `input`: the input/clock seams the simulation is driven through
//! - `keyboard`: held-key tracking over crossterm key events
//! - `terminal`: raw-mode / alternate-screen guard that restores on drop

pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod keyboard;
pub mod terminal;

pub use config::{ConfigError, SimConfig};
pub use entities::GameState;
