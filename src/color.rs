//! RGB color value type
//!
//! Channels are stored as `u8`, so every value the editor can hold is already
//! inside `0..=255`. Adjustments saturate at the bounds instead of wrapping.

use serde::{Deserialize, Serialize};

/// One of the three color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in slider order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Single-letter label used by the sliders
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Red => write!(f, "Red"),
            Channel::Green => write!(f, "Green"),
            Channel::Blue => write!(f, "Blue"),
        }
    }
}

/// Unit step applied to a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Decrease,
    Increase,
}

/// An RGB triple. Serialized as `{"R": .., "G": .., "B": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray with all channels set to `v`
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    pub fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }

    /// Step a channel by one, saturating at 0 and 255
    pub fn adjust(&mut self, channel: Channel, step: Adjust) {
        let current = self.get(channel);
        let next = match step {
            Adjust::Decrease => current.saturating_sub(1),
            Adjust::Increase => current.saturating_add(1),
        };
        self.set(channel, next);
    }

    /// Hex notation, e.g. `#0a141e`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Grayscale ramp for `count` slots: slot `i` gets `i * 255 / (count - 1)`.
///
/// A single slot is black.
pub fn grayscale_ramp(count: usize) -> Vec<Color> {
    if count <= 1 {
        return vec![Color::gray(0); count];
    }
    let last = count - 1;
    (0..count)
        .map(|i| Color::gray((i * 255 / last) as u8))
        .collect()
}
