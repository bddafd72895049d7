//! Parsing of the text typed in input mode

use std::path::PathBuf;

/// Prefix of the save command, including its trailing space
pub const SAVE_PREFIX: &str = "save ";

/// Parse a channel value: non-empty, ASCII digits only, at most 255.
///
/// Leading zeros are accepted.
pub fn parse_channel_value(text: &str) -> Option<u8> {
    if text.is_empty() {
        return None;
    }
    text.chars().try_fold(0u8, |acc, c| {
        let digit = c.to_digit(10)? as u8;
        acc.checked_mul(10)?.checked_add(digit)
    })
}

/// A command typed into the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// `save <path>`
    Save(PathBuf),
}

impl InputCommand {
    /// Recognize a command; anything else is `None`
    pub fn parse(text: &str) -> Option<Self> {
        text.strip_prefix(SAVE_PREFIX)
            .map(|path| InputCommand::Save(PathBuf::from(path)))
    }
}
