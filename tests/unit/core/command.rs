use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::FocusNext.name(), "focusNext");
    assert_eq!(Command::CloseDialog.name(), "closeDialog");
    assert_eq!(Command::Quit.name(), "quit");
    assert_eq!(Command::Custom("myCommand".to_string()).name(), "myCommand");
}

#[test]
fn from_name_round_trips_known_commands() {
    for cmd in [
        Command::FocusNext,
        Command::FocusPrev,
        Command::Activate,
        Command::CloseDialog,
        Command::Quit,
    ] {
        assert_eq!(Command::from_name(cmd.name()), cmd);
    }
}

#[test]
fn from_name_keeps_unknown_names_as_custom() {
    assert_eq!(
        Command::from_name(" openBrowser "),
        Command::Custom("openBrowser".to_string())
    );
}
