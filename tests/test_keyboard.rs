use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use asteroid_shooter::input::{Action, InputSource, TickInput};
use asteroid_shooter::keyboard::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

#[test]
fn pressed_key_is_held_within_window() {
    let mut keys = KeyTracker::new(4);
    keys.advance();
    keys.record(&press(KeyCode::Left));
    for _ in 0..4 {
        assert!(keys.is_pressed(Action::MoveLeft));
        keys.advance();
    }
    assert!(keys.is_pressed(Action::MoveLeft)); // exactly 4 frames old
    keys.advance();
    assert!(!keys.is_pressed(Action::MoveLeft));
}

#[test]
fn repeat_refreshes_hold() {
    let mut keys = KeyTracker::new(2);
    keys.record(&press(KeyCode::Char(' ')));
    for _ in 0..10 {
        keys.advance();
        keys.record(&KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        ));
    }
    assert!(keys.is_pressed(Action::Fire));
}

#[test]
fn release_drops_key_immediately() {
    let mut keys = KeyTracker::default();
    keys.record(&press(KeyCode::Right));
    assert!(keys.is_pressed(Action::MoveRight));
    keys.record(&release(KeyCode::Right));
    assert!(!keys.is_pressed(Action::MoveRight));
}

#[test]
fn letter_bindings_match_arrows() {
    let mut keys = KeyTracker::default();
    keys.record(&press(KeyCode::Char('a')));
    keys.record(&press(KeyCode::Char('D')));
    let input = TickInput::sample(&keys);
    assert_eq!(input, TickInput { left: true, right: true, fire: false });
    assert_eq!(input.horizontal(), 0);
}

#[test]
fn simultaneous_fire_and_move() {
    let mut keys = KeyTracker::default();
    keys.record(&press(KeyCode::Char(' ')));
    keys.record(&press(KeyCode::Left));
    let input = TickInput::sample(&keys);
    assert!(input.fire);
    assert_eq!(input.horizontal(), -1);
}

#[test]
fn unbound_keys_do_nothing() {
    let mut keys = KeyTracker::default();
    keys.record(&press(KeyCode::Char('x')));
    assert_eq!(TickInput::sample(&keys), TickInput::default());
}

#[test]
fn quit_keys() {
    assert!(is_quit(&press(KeyCode::Char('q'))));
    assert!(is_quit(&press(KeyCode::Esc)));
    assert!(is_quit(&KeyEvent::new_with_kind(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
        KeyEventKind::Press,
    )));
    assert!(!is_quit(&press(KeyCode::Char('c'))));
    assert!(!is_quit(&release(KeyCode::Char('q'))));
}

#[test]
fn every_action_has_a_binding() {
    for action in [Action::MoveLeft, Action::MoveRight, Action::Fire] {
        assert!(!bindings(action).is_empty());
    }
}
