use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::editor::{DEFAULT_COLOR, DEFAULT_MAX_INPUT_LEN, DEFAULT_SLOTS};

/// Upper bound for the configured palette capacity
pub const MAX_SLOTS: usize = 64;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub palette: PaletteConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub initial: InitialColor,

    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

/// Palette-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Number of palette slots
    #[serde(default = "default_slots")]
    pub slots: usize,

    /// Where the save key writes the palette.
    /// Defaults to `palette.json` in the documents or home directory.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Read the palette file back at startup if it exists
    #[serde(default)]
    pub load_on_start: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOTS,
            file: None,
            load_on_start: false,
        }
    }
}

fn default_slots() -> usize {
    DEFAULT_SLOTS
}

/// Input line configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Maximum number of characters in the input line
    #[serde(default = "default_max_len")]
    pub max_len: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

fn default_max_len() -> usize {
    DEFAULT_MAX_INPUT_LEN
}

/// Color the editor starts with
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InitialColor {
    #[serde(default = "default_channel")]
    pub r: u8,
    #[serde(default = "default_channel")]
    pub g: u8,
    #[serde(default = "default_channel")]
    pub b: u8,
}

impl Default for InitialColor {
    fn default() -> Self {
        Self {
            r: DEFAULT_COLOR.r,
            g: DEFAULT_COLOR.g,
            b: DEFAULT_COLOR.b,
        }
    }
}

fn default_channel() -> u8 {
    DEFAULT_COLOR.r
}

impl From<InitialColor> for Color {
    fn from(initial: InitialColor) -> Self {
        Color::new(initial.r, initial.g, initial.b)
    }
}

/// Key binding configuration (Alacritty-style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key to bind (e.g., "j", "Enter", "Esc", "Left")
    pub key: String,

    /// Modifier keys (e.g., "Control", "Alt", "Control|Alt")
    #[serde(default)]
    pub mods: Option<String>,

    /// Mode restriction (e.g., "Normal", "Input", "~Normal")
    #[serde(default)]
    pub mode: Option<String>,

    /// Built-in action to execute ("None" disables the key)
    #[serde(default)]
    pub action: Option<String>,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mods: None,
            mode: None,
            action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_mods(mut self, mods: impl Into<String>) -> Self {
        self.mods = Some(mods.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}
