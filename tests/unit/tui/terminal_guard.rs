use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingMode {
    calls: Mutex<Vec<&'static str>>,
    fail_restore: bool,
}

impl TerminalMode for RecordingMode {
    fn enter(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        if self.fail_restore {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "tty gone"));
        }
        Ok(())
    }
}

#[test]
fn guard_restores_terminal_on_drop() {
    let mode = Arc::new(RecordingMode::default());
    {
        let _guard = TerminalGuard::with_mode(mode.clone()).unwrap();
    }

    assert_eq!(&*mode.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn restore_runs_once_across_restorer_and_drop() {
    let mode = Arc::new(RecordingMode::default());
    let guard = TerminalGuard::with_mode(mode.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(&*mode.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn failed_restore_is_reported_once_and_not_retried() {
    let mode = Arc::new(RecordingMode {
        fail_restore: true,
        ..RecordingMode::default()
    });
    let guard = TerminalGuard::with_mode(mode.clone()).unwrap();
    let restorer = guard.restorer();

    assert!(restorer.restore().is_err());
    drop(guard);

    assert_eq!(&*mode.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn exit_codes_follow_shell_convention() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}

#[test]
fn failed_enter_does_not_build_a_guard() {
    struct BrokenTty;

    impl TerminalMode for BrokenTty {
        fn enter(&self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "not a tty"))
        }

        fn leave(&self) -> std::io::Result<()> {
            panic!("leave must not run when enter failed");
        }
    }

    assert!(TerminalGuard::with_mode(Arc::new(BrokenTty)).is_err());
}

#[test]
fn default_mode_captures_mouse_for_card_clicks() {
    assert!(CrosstermMode::default().mouse_capture);
}
