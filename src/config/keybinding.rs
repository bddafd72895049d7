use crossterm::event::{KeyCode, KeyModifiers};

use crate::error::{Error, Result};

/// Parse a key string into KeyCode
pub fn parse_key(key: &str) -> Result<KeyCode> {
    // A lone space is a key of its own
    if key == " " {
        return Ok(KeyCode::Char(' '));
    }
    let key = key.trim();

    // Single character
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    // Named keys
    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Esc),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "tab" => Ok(KeyCode::Tab),
        "space" => Ok(KeyCode::Char(' ')),
        "colon" => Ok(KeyCode::Char(':')),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" => Ok(KeyCode::PageUp),
        "pagedown" => Ok(KeyCode::PageDown),
        "insert" => Ok(KeyCode::Insert),
        "delete" | "del" => Ok(KeyCode::Delete),
        // Numpad keys
        "numpadenter" => Ok(KeyCode::Enter),
        "numpadadd" => Ok(KeyCode::Char('+')),
        "numpadsubtract" => Ok(KeyCode::Char('-')),
        other => parse_function_key(other)
            .ok_or_else(|| Error::InvalidKeyBinding(format!("Unknown key: {}", key))),
    }
}

/// `f1` through `f12`
fn parse_function_key(key: &str) -> Option<KeyCode> {
    let n: u8 = key.strip_prefix('f')?.parse().ok()?;
    (1..=12).contains(&n).then_some(KeyCode::F(n))
}

/// Parse modifier string into KeyModifiers
pub fn parse_modifiers(mods: Option<&str>) -> KeyModifiers {
    let Some(mods) = mods else {
        return KeyModifiers::NONE;
    };

    let mut result = KeyModifiers::NONE;

    for part in mods.split('|') {
        let part = part.trim().to_lowercase();
        match part.as_str() {
            "control" | "ctrl" => result |= KeyModifiers::CONTROL,
            "shift" => result |= KeyModifiers::SHIFT,
            "alt" | "option" => result |= KeyModifiers::ALT,
            "super" | "command" | "cmd" => result |= KeyModifiers::SUPER,
            _ => {}
        }
    }

    result
}
