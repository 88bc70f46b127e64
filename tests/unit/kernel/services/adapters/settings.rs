use super::*;
use tempfile::tempdir;

#[test]
fn parse_keybinding_handles_modifiers() {
    assert_eq!(
        parse_keybinding("ctrl+c"),
        Some(Key::ctrl(KeyCode::Char('c')))
    );
    assert_eq!(
        parse_keybinding(" Shift + Tab "),
        Some(Key::shift(KeyCode::Tab))
    );
}

#[test]
fn parse_keybinding_named_keys() {
    assert_eq!(parse_keybinding("esc"), Some(Key::simple(KeyCode::Esc)));
    assert_eq!(parse_keybinding("space"), Some(Key::simple(KeyCode::Char(' '))));
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
}

#[test]
fn parse_keybinding_uppercase_char_implies_shift() {
    assert_eq!(parse_keybinding("Q"), Some(Key::shift(KeyCode::Char('q'))));
}

#[test]
fn parse_keybinding_rejects_garbage() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("nope"), None);
}

#[test]
fn default_settings_file_is_created_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("setting.json");

    write_default_settings_if_missing(&path).unwrap();
    let settings = load_settings_from(&path).expect("defaults should parse");
    assert!(settings.keybindings.is_empty());

    std::fs::write(&path, r#"{ "assets_dir": "qr" }"#).unwrap();
    write_default_settings_if_missing(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.assets_dir.as_deref(), Some("qr"));
}

#[test]
fn invalid_settings_file_yields_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(load_settings_from(&path).is_none());
    assert!(load_settings_from(&dir.path().join("missing.json")).is_none());
}
