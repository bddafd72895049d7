use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::palette::default_palette_path;

use super::keybinding::parse_key;
use super::types::{Config, KeyBinding, MAX_SLOTS};

/// Application directory name under the user's config directory
pub const APP_NAME: &str = "rgbpal";

/// `~/.config/rgbpal/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file yields the defaults; an explicitly given path must exist.
    /// Values are not checked here: apply command line overrides, then call
    /// [`Config::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (Some(path.to_path_buf()), true),
            None => (default_config_path(), false),
        };

        let config = match path {
            Some(path) if required || path.exists() => {
                tracing::debug!(path = %path.display(), "Loading config");
                let content = std::fs::read_to_string(&path)?;
                Self::from_toml(&content)?
            }
            _ => Self::default(),
        };

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reject values the editor cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.palette.slots == 0 || self.palette.slots > MAX_SLOTS {
            return Err(Error::InvalidConfig(format!(
                "palette.slots must be between 1 and {}, got {}",
                MAX_SLOTS, self.palette.slots
            )));
        }
        if self.input.max_len == 0 {
            return Err(Error::InvalidConfig(
                "input.max_len must be at least 1".to_string(),
            ));
        }
        for binding in &self.bindings {
            parse_key(&binding.key)?;
        }
        Ok(())
    }

    /// Resolve where the palette is saved
    pub fn palette_path(&self) -> Result<PathBuf> {
        match &self.palette.file {
            Some(file) => Ok(file.clone()),
            None => default_palette_path().ok_or(Error::NoPalettePath),
        }
    }

    /// User bindings followed by the built-in defaults
    pub fn effective_bindings(&self) -> Vec<KeyBinding> {
        self.bindings
            .iter()
            .cloned()
            .chain(default_bindings())
            .collect()
    }
}

/// Built-in key bindings
pub fn default_bindings() -> Vec<KeyBinding> {
    let normal = |key: &str, action: &str| {
        KeyBinding::new(key)
            .with_action(action)
            .with_mode("Normal")
    };
    let input = |key: &str, action: &str| {
        KeyBinding::new(key)
            .with_action(action)
            .with_mode("Input")
    };

    vec![
        normal("q", "Quit"),
        normal(":", "EnterInputMode"),
        // Channel adjustment
        normal("a", "Decrease"),
        normal("h", "Decrease"),
        normal("Left", "Decrease"),
        normal("d", "Increase"),
        normal("l", "Increase"),
        normal("Right", "Increase"),
        // Focus
        normal("w", "FocusPrev"),
        normal("k", "FocusPrev"),
        normal("Up", "FocusPrev"),
        normal("s", "FocusNext"),
        normal("j", "FocusNext"),
        normal("Down", "FocusNext"),
        // Palette
        normal("p", "PushToSlot"),
        normal("g", "PullFromSlot"),
        normal("S", "Save"),
        // Input line
        input("Esc", "Cancel"),
        input("Backspace", "DeleteChar"),
        input("Enter", "Confirm"),
    ]
}
