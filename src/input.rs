//! Seams between the simulation and the outside world.
//!
//! The simulation never talks to a keyboard or a clock directly.  The front
//! end samples an [`InputSource`] into a [`TickInput`] once per tick and reads
//! a [`Clock`] once per tick; randomness is any `rand::Rng`.

use std::time::Instant;

/// The three controls the simulation understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
}

/// Anything that can answer "is this control held right now?".
pub trait InputSource {
    fn is_pressed(&self, action: Action) -> bool;
}

/// Monotonic time in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Held-control snapshot for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl TickInput {
    /// Poll every control once.
    pub fn sample(source: &impl InputSource) -> Self {
        Self {
            left: source.is_pressed(Action::MoveLeft),
            right: source.is_pressed(Action::MoveRight),
            fire: source.is_pressed(Action::Fire),
        }
    }

    /// -1, 0 or +1.  Left and right together cancel out.
    pub fn horizontal(&self) -> i8 {
        self.right as i8 - self.left as i8
    }
}

impl InputSource for TickInput {
    fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::Fire => self.fire,
        }
    }
}

/// Wall clock measured from the moment it was created.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
