//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel::store` so the selection core stays free of terminal crates.

pub mod terminal_guard;
pub mod view;

pub use terminal_guard::{TerminalGuard, TerminalRestorer, TerminationSignal};
pub use view::{EventResult, View};
