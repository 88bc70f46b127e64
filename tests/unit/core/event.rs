use super::*;
use crossterm::event::{KeyEventState, MouseButton, MouseEventKind};

fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('c'));
    assert_eq!(key.code, KeyCode::Char('c'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn uppercase_char_is_normalized_to_shift() {
    let event = key_event(KeyCode::Char('Q'), KeyModifiers::NONE, KeyEventKind::Press);
    let key: Key = event.into();
    assert_eq!(key, Key::shift(KeyCode::Char('q')));
}

#[test]
fn backtab_drops_shift_modifier() {
    let event = key_event(KeyCode::BackTab, KeyModifiers::SHIFT, KeyEventKind::Press);
    let key: Key = event.into();
    assert_eq!(key, Key::simple(KeyCode::BackTab));
}

#[test]
fn key_release_is_not_a_press() {
    let release = InputEvent::Key(key_event(
        KeyCode::Enter,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert!(release.as_key_press().is_none());

    let press = InputEvent::Key(key_event(
        KeyCode::Enter,
        KeyModifiers::NONE,
        KeyEventKind::Press,
    ));
    assert!(press.as_key_press().is_some());
}

#[test]
fn test_mouse_position() {
    let event = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 10,
        row: 20,
        modifiers: KeyModifiers::NONE,
    };
    let input: InputEvent = crossterm::event::Event::Mouse(event).into();
    let InputEvent::Mouse(mouse) = &input else {
        panic!("expected a mouse event");
    };
    assert_eq!(MousePosition::from_event(mouse), MousePosition::new(10, 20));
}
