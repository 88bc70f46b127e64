//! Service adapters: OS specific implementations (file system, image decoding).

pub mod assets;
pub mod keybinding;
pub mod settings;

pub use assets::{AssetService, PaymentCode, PixelImage};
pub use keybinding::{KeybindingContext, KeybindingService};
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    load_settings_from, parse_keybinding,
};
