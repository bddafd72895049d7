pub mod action;
pub mod app;
pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod palette;
pub mod tui;

pub use app::App;
pub use color::{Channel, Color};
pub use config::Config;
pub use editor::EditorState;
pub use error::{Error, Result};
