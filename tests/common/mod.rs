//! Common test utilities
#![allow(dead_code)]

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rgbpal::{App, Config};
use tempfile::TempDir;

/// An App whose save key writes into a temporary directory
pub struct TestApp {
    pub dir: TempDir,
    pub app: App,
}

impl TestApp {
    /// Create an App with default configuration
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let app = App::new(config, dir.path().join("palette.json"));
        Self { dir, app }
    }

    /// Press a key without modifiers
    pub fn press(&mut self, code: KeyCode) {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    /// Press a character key `times` times
    pub fn repeat(&mut self, c: char, times: usize) {
        for _ in 0..times {
            self.press(KeyCode::Char(c));
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Enter input mode, type `text` and confirm
    pub fn submit(&mut self, text: &str) {
        self.press(KeyCode::Char(':'));
        self.type_text(text);
        self.press(KeyCode::Enter);
    }

    /// Path of a file inside the temp directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
