use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not determine a default palette file location")]
    NoPalettePath,

    #[error("Your terminal does not support color")]
    NoColorSupport,
}
