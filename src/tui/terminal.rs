use std::io::{stdout, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::{Error, Result};

pub type CrosstermTerminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Terminal wrapper for managing terminal state
pub struct Terminal {
    terminal: CrosstermTerminal,
}

impl Terminal {
    /// Create a new terminal instance
    pub fn new() -> Result<Self> {
        ensure_color_support(std::env::var("TERM").ok().as_deref())?;
        let terminal = Self::setup()?;
        Ok(Self { terminal })
    }

    /// Setup terminal for TUI
    fn setup() -> Result<CrosstermTerminal> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        let backend = CrosstermBackend::new(stdout());
        let terminal = ratatui::Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore terminal to original state
    fn restore() -> Result<()> {
        disable_raw_mode()?;
        execute!(stdout(), LeaveAlternateScreen, Show)?;
        Ok(())
    }

    /// Draw frame using provided closure
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = Self::restore();
    }
}

/// Fail when `TERM` names a terminal without color
pub fn ensure_color_support(term: Option<&str>) -> Result<()> {
    match term {
        Some("dumb") => Err(Error::NoColorSupport),
        _ => Ok(()),
    }
}
