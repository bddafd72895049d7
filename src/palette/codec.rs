use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::color::Color;
use crate::error::Result;

/// Reads and writes palettes as a JSON array of `{"R","G","B"}` records
pub struct PaletteCodec;

impl PaletteCodec {
    /// Serialize slots in order as a pretty-printed JSON array
    pub fn encode(slots: &[Color]) -> Result<String> {
        Ok(serde_json::to_string_pretty(slots)?)
    }

    /// Parse a palette document
    pub fn decode(text: &str) -> Result<Vec<Color>> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the palette to `path`, replacing any existing file
    pub fn save(path: &Path, slots: &[Color]) -> Result<()> {
        let document = Self::encode(slots)?;
        let mut file = File::create(path)?;
        file.write_all(document.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        Ok(())
    }

    /// Read a palette previously written by [`PaletteCodec::save`]
    pub fn load(path: &Path) -> Result<Vec<Color>> {
        let text = std::fs::read_to_string(path)?;
        Self::decode(&text)
    }
}
