mod keybinding;
mod loader;
mod types;

pub use keybinding::{parse_key, parse_modifiers};
pub use loader::{default_bindings, default_config_path, APP_NAME};
pub use types::{Config, InitialColor, InputConfig, KeyBinding, PaletteConfig, MAX_SLOTS};
