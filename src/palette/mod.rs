mod codec;

use std::path::PathBuf;

pub use codec::PaletteCodec;

/// File name used for the default palette location
pub const DEFAULT_PALETTE_FILE: &str = "palette.json";

/// Default palette path: the documents directory, else the home directory
pub fn default_palette_path() -> Option<PathBuf> {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(DEFAULT_PALETTE_FILE))
}
