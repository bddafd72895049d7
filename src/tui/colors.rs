//! Color definitions using 256-color palette
//!
//! UI chrome uses indexed colors; only the preview and palette swatches use
//! true color.

use ratatui::style::Color;

use crate::color;

/// Primary accent color (cyan-like)
pub const PRIMARY: Color = Color::Indexed(73); // Steel blue

/// Secondary/muted text color
pub const MUTED: Color = Color::Indexed(243); // Gray

/// Error/danger color
pub const ERROR: Color = Color::Indexed(167); // Indian red

/// Success color
pub const SUCCESS: Color = Color::Indexed(108); // Dark sea green

/// Header/footer background
pub const BAR_BG: Color = Color::Indexed(236); // Dark gray

/// Border color
pub const BORDER: Color = Color::Indexed(243); // Gray

/// Border color for focused/active elements
pub const BORDER_FOCUS: Color = Color::Indexed(73); // Steel blue

/// Terminal color for an editor color
pub fn swatch(c: color::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Black or white, whichever reads better on `c`
pub fn contrast_text(c: color::Color) -> Color {
    let luma = 299 * u32::from(c.r) + 587 * u32::from(c.g) + 114 * u32::from(c.b);
    if luma >= 128_000 {
        Color::Black
    } else {
        Color::White
    }
}
