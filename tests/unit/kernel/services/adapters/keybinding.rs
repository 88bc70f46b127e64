use super::*;

fn rule(key: &str, command: &str, context: Option<&str>) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: context.map(str::to_string),
    }
}

#[test]
fn page_has_navigation_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Page, &Key::simple(KeyCode::Right)),
        Some(&Command::FocusNext)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Page, &Key::simple(KeyCode::BackTab)),
        Some(&Command::FocusPrev)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Page, &Key::simple(KeyCode::Enter)),
        Some(&Command::Activate)
    );
}

#[test]
fn enter_and_esc_close_the_dialog() {
    let service = KeybindingService::new();
    for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char('q')] {
        assert_eq!(
            service.resolve(KeybindingContext::Dialog, &Key::simple(code)),
            Some(&Command::CloseDialog)
        );
    }
}

#[test]
fn global_quit_falls_through_in_every_context() {
    let service = KeybindingService::new();
    let key = Key::ctrl(KeyCode::Char('c'));
    for context in [
        KeybindingContext::Global,
        KeybindingContext::Page,
        KeybindingContext::Dialog,
    ] {
        assert_eq!(service.resolve(context, &key), Some(&Command::Quit));
    }
}

#[test]
fn navigation_keys_do_nothing_in_dialog() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Dialog, &Key::simple(KeyCode::Right)),
        None
    );
}

#[test]
fn apply_rules_binds_unbinds_and_skips_invalid() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[
        rule("j", "focusNext", Some("page")),
        rule("q", "", Some("page")),
        rule("x", "closeDialog", Some("nowhere")),
        rule("ctrl+", "quit", None),
        rule("f10", "quit", None),
    ]);

    assert_eq!(
        service.resolve(KeybindingContext::Page, &Key::simple(KeyCode::Char('j'))),
        Some(&Command::FocusNext)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Page, &Key::simple(KeyCode::Char('q'))),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::Dialog, &Key::simple(KeyCode::Char('x'))),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::Dialog, &Key::simple(KeyCode::F(10))),
        Some(&Command::Quit)
    );
}

#[test]
fn context_parse_accepts_aliases() {
    assert_eq!(KeybindingContext::parse("Modal"), Some(KeybindingContext::Dialog));
    assert_eq!(KeybindingContext::parse(" cards "), Some(KeybindingContext::Page));
    assert_eq!(KeybindingContext::parse("editor"), None);
}
