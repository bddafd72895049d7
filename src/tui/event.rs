use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::error::Result;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize event
    Resize,
}

/// Blocking source of terminal events
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Block until the next key press or resize
    pub fn next(&self) -> Result<Event> {
        loop {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                event::Event::Resize(_, _) => return Ok(Event::Resize),
                _ => {}
            }
        }
    }
}
