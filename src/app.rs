use std::path::{Path, PathBuf};

use crossterm::event::KeyEvent;

use crate::action::{ActionDispatcher, ActionHandler};
use crate::config::Config;
use crate::editor::{EditorState, Status};
use crate::error::Result;
use crate::palette::PaletteCodec;
use crate::tui::{render, Event, EventHandler, Terminal};

/// Main application: editor state plus the key dispatcher and save target
pub struct App {
    pub state: EditorState,
    palette_path: PathBuf,
    action_dispatcher: ActionDispatcher,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &Config, palette_path: PathBuf) -> Self {
        let state = EditorState::new(
            config.palette.slots,
            config.input.max_len,
            config.initial.into(),
        );
        let action_dispatcher = ActionDispatcher::new(config);

        let mut app = Self {
            state,
            palette_path,
            action_dispatcher,
        };

        if config.palette.load_on_start && app.palette_path.exists() {
            app.load_palette();
        }

        app
    }

    /// Where the save key writes
    pub fn palette_path(&self) -> &Path {
        &self.palette_path
    }

    /// Run the application main loop
    pub fn run(&mut self, mut terminal: Terminal) -> Result<()> {
        let event_handler = EventHandler;

        while !self.state.is_terminated() {
            // Draw UI
            let snapshot = self.state.snapshot();
            terminal.draw(|frame| render(frame, &snapshot))?;

            // Block for the next event
            match event_handler.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize => {
                    // Redrawn on the next iteration
                }
            }
        }

        Ok(())
    }

    /// Feed one key press through the dispatcher
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.action_dispatcher.dispatch(key, self.state.mode()) {
            ActionHandler::handle(&mut self.state, action, &self.palette_path);
        }
    }

    /// Replace the palette with the contents of the palette file
    fn load_palette(&mut self) {
        match PaletteCodec::load(&self.palette_path) {
            Ok(colors) => {
                let count = self.state.replace_slots(&colors);
                tracing::info!(path = %self.palette_path.display(), count, "Loaded palette");
                self.state.set_status(Status::info("Loaded palette."));
            }
            Err(e) => {
                tracing::warn!(path = %self.palette_path.display(), error = %e, "Failed to load palette");
                self.state.set_status(Status::error("Error reading file."));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::color::Color;
    use crate::editor::Mode;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_new_uses_config() {
        let config = Config::from_toml(
            r#"
            [palette]
            slots = 3

            [initial]
            r = 1
            g = 2
            b = 3
            "#,
        )
        .unwrap();
        let app = App::new(&config, PathBuf::from("unused.json"));
        assert_eq!(app.state.slot_count(), 3);
        assert_eq!(app.state.color(), Color::new(1, 2, 3));
        assert_eq!(app.palette_path(), Path::new("unused.json"));
    }

    #[test]
    fn test_quit_key_terminates() {
        let mut app = App::new(&Config::default(), PathBuf::from("unused.json"));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state.is_terminated());
    }

    #[test]
    fn test_typed_q_does_not_quit_in_input_mode() {
        let mut app = App::new(&Config::default(), PathBuf::from("unused.json"));
        press(&mut app, KeyCode::Char(':'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.state.is_terminated());
        assert_eq!(app.state.mode(), Mode::Input);
        assert_eq!(app.state.input(), "q");
    }

    #[test]
    fn test_load_on_start_with_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");
        std::fs::write(&path, "not json").unwrap();

        let config = Config::from_toml("[palette]\nload_on_start = true\n").unwrap();
        let app = App::new(&config, path);
        assert_eq!(app.state.status().unwrap().message, "Error reading file.");
        assert_eq!(app.state.slots()[0], Color::gray(0));
    }
}
