/// Held-key tracking on top of crossterm key events.
///
/// Terminals deliver key *events*, the simulation wants key *state*.  Instead
/// of acting on each event, `KeyTracker` records the frame of the last
/// press/repeat for every key and reports a key as held while that record is
/// fresh.  This lets Space + A/D be held together with no interference.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are dropped on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `hold_window` frames of silence,
///   which is shorter than the OS repeat interval, so a key stays live while
///   it is actively generating repeats.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{Action, InputSource};

/// ≈133 ms at 60 FPS.  The OS key-repeat rate is ≥ 15 Hz, so a held key is
/// always refreshed before it expires.
pub const DEFAULT_HOLD_WINDOW: u64 = 8;

#[derive(Clone, Debug)]
pub struct KeyTracker {
    /// Each held key → the frame it was last seen (press or repeat).
    last_seen: HashMap<KeyCode, u64>,
    frame: u64,
    hold_window: u64,
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_WINDOW)
    }
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        Self {
            last_seen: HashMap::new(),
            frame: 0,
            hold_window,
        }
    }

    /// Move to the next frame.  Call once per tick, before draining events.
    pub fn advance(&mut self) {
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn record(&mut self, event: &KeyEvent) {
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(event.code, self.frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&event.code);
            }
        }
    }

    /// True if `key` was seen within the last `hold_window` frames.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.last_seen
            .get(&key)
            .is_some_and(|&last| self.frame.saturating_sub(last) <= self.hold_window)
    }
}

/// Keys bound to each action.
pub fn bindings(action: Action) -> &'static [KeyCode] {
    match action {
        Action::MoveLeft => &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
        Action::MoveRight => &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
        Action::Fire => &[KeyCode::Char(' ')],
    }
}

impl InputSource for KeyTracker {
    fn is_pressed(&self, action: Action) -> bool {
        bindings(action).iter().any(|&key| self.is_held(key))
    }
}

/// `Q`, `Esc` or `Ctrl-C` end the session.
pub fn is_quit(event: &KeyEvent) -> bool {
    if event.kind != KeyEventKind::Press {
        return false;
    }
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
