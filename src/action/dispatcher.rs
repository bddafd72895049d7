use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{parse_key, parse_modifiers, Config, KeyBinding};
use crate::editor::Mode;

use super::Action;

/// A binding with its key already parsed
struct ResolvedBinding {
    code: KeyCode,
    mods: KeyModifiers,
    mode: Option<String>,
    action: Option<Action>,
}

/// Dispatches key events to actions based on configuration
pub struct ActionDispatcher {
    bindings: Vec<ResolvedBinding>,
}

impl ActionDispatcher {
    /// Create a new dispatcher from configuration
    pub fn new(config: &Config) -> Self {
        Self::from_bindings(&config.effective_bindings())
    }

    /// Create a dispatcher from an explicit binding list; unparsable keys are skipped
    pub fn from_bindings(bindings: &[KeyBinding]) -> Self {
        let bindings = bindings
            .iter()
            .filter_map(|binding| {
                let code = match parse_key(&binding.key) {
                    Ok(code) => code,
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping key binding");
                        return None;
                    }
                };
                let action = binding.action.as_deref().and_then(Action::from_str);
                if action.is_none() && binding.action.as_deref() != Some("None") {
                    tracing::warn!(key = %binding.key, action = ?binding.action, "Unknown action, key disabled");
                }
                Some(ResolvedBinding {
                    code,
                    mods: parse_modifiers(binding.mods.as_deref()),
                    mode: binding.mode.clone(),
                    action,
                })
            })
            .collect();

        Self { bindings }
    }

    /// Dispatch a key event to an action
    pub fn dispatch(&self, key: KeyEvent, mode: Mode) -> Option<Action> {
        // First matching binding wins, even if it disables the key. Bindings
        // whose action does nothing in this mode are passed over.
        if let Some(binding) = self.bindings.iter().find(|b| {
            self.matches(b, &key, mode)
                && b.action.as_ref().is_none_or(|action| action.applies_in(mode))
        }) {
            return binding.action.clone();
        }

        // Character input in Input mode
        if mode == Mode::Input
            && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT)
        {
            if let KeyCode::Char(c) = key.code {
                return Some(Action::InsertChar(c));
            }
        }

        None
    }

    /// Check if a binding matches the key event and mode
    fn matches(&self, binding: &ResolvedBinding, key: &KeyEvent, mode: Mode) -> bool {
        if binding.code != key.code {
            return false;
        }

        // Shift is already folded into the character
        let mut key_mods = key.modifiers;
        if matches!(key.code, KeyCode::Char(_)) {
            key_mods.remove(KeyModifiers::SHIFT);
        }
        if binding.mods != key_mods {
            return false;
        }

        match &binding.mode {
            Some(mode_str) => self.mode_matches(mode_str, mode),
            None => true,
        }
    }

    /// Check if mode restriction matches current mode
    fn mode_matches(&self, mode_str: &str, current_mode: Mode) -> bool {
        let mode_str = mode_str.trim();

        // Handle negation (~)
        if let Some(stripped) = mode_str.strip_prefix('~') {
            return !self.mode_name_matches(stripped, current_mode);
        }

        // Handle multiple modes (|)
        if mode_str.contains('|') {
            return mode_str
                .split('|')
                .any(|m| self.mode_matches(m.trim(), current_mode));
        }

        self.mode_name_matches(mode_str, current_mode)
    }

    /// Check if a mode name matches
    fn mode_name_matches(&self, name: &str, current_mode: Mode) -> bool {
        match name.trim().to_lowercase().as_str() {
            "normal" => current_mode == Mode::Normal,
            "input" => current_mode == Mode::Input,
            _ => false,
        }
    }
}
