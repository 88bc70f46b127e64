//! Service ports: data contracts shared by the kernel and the adapters.

pub mod settings;

pub use settings::{KeybindingRule, Settings, ThemeSettings};
