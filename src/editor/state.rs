use crate::color::{grayscale_ramp, Adjust, Channel, Color};

use super::focus::{FocusDirection, FocusPosition};
use super::input::InputBuffer;

/// Default number of palette slots
pub const DEFAULT_SLOTS: usize = 8;

/// Default input buffer capacity in characters
pub const DEFAULT_MAX_INPUT_LEN: usize = 128;

/// Color shown when the editor starts
pub const DEFAULT_COLOR: Color = Color::gray(100);

/// Editor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Input,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Input => write!(f, "Input"),
        }
    }
}

/// Status level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Most recent status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub level: StatusLevel,
}

impl Status {
    pub fn new(message: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Error)
    }
}

/// Read-only view of the editor handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub color: Color,
    pub focus: FocusPosition,
    pub mode: Mode,
    pub input: &'a str,
    pub cursor_offset: usize,
    pub slots: &'a [Color],
    pub status: Option<&'a Status>,
}

/// The whole editor: current color, focus, mode, input text, palette and status
#[derive(Debug, Clone)]
pub struct EditorState {
    color: Color,
    focus: FocusPosition,
    mode: Mode,
    input: InputBuffer,
    slots: Vec<Color>,
    status: Option<Status>,
    terminated: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS, DEFAULT_MAX_INPUT_LEN, DEFAULT_COLOR)
    }
}

impl EditorState {
    /// Create an editor with `slots` palette slots (at least one) filled with a
    /// grayscale ramp
    pub fn new(slots: usize, max_input_len: usize, initial: Color) -> Self {
        Self {
            color: initial,
            focus: FocusPosition::default(),
            mode: Mode::Normal,
            input: InputBuffer::new(max_input_len),
            slots: grayscale_ramp(slots.max(1)),
            status: None,
            terminated: false,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn focus(&self) -> FocusPosition {
        self.focus
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    pub fn slots(&self) -> &[Color] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            color: self.color,
            focus: self.focus,
            mode: self.mode,
            input: self.input.as_str(),
            cursor_offset: self.input.cursor_offset(),
            slots: &self.slots,
            status: self.status.as_ref(),
        }
    }

    /// Step the focused channel by one; no-op on a palette slot
    pub fn adjust_focused_channel(&mut self, step: Adjust) {
        if let Some(channel) = self.focus.channel() {
            self.color.adjust(channel, step);
        }
    }

    pub fn move_focus(&mut self, direction: FocusDirection) {
        self.focus = self.focus.step(direction, self.slots.len());
    }

    /// Focus a specific target; out-of-range slots are ignored
    pub fn set_focus(&mut self, focus: FocusPosition) {
        if focus.slot().map_or(true, |slot| slot < self.slots.len()) {
            self.focus = focus;
        }
    }

    pub fn enter_input_mode(&mut self) {
        self.mode = Mode::Input;
        self.input.clear();
    }

    pub fn append_input_char(&mut self, c: char) {
        if self.mode == Mode::Input {
            self.input.push(c);
        }
    }

    pub fn backspace_input(&mut self) {
        self.input.pop();
    }

    /// Leave input mode, discarding the buffer
    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.mode = Mode::Normal;
    }

    /// Overwrite a channel directly
    pub fn set_channel_value(&mut self, channel: Channel, value: u8) {
        self.color.set(channel, value);
    }

    /// Copy the current color into the focused slot
    pub fn write_slot_from_current(&mut self) {
        if let Some(slot) = self.focus.slot().and_then(|i| self.slots.get_mut(i)) {
            *slot = self.color;
        }
    }

    /// Copy the focused slot into the current color
    pub fn read_slot_into_current(&mut self) {
        if let Some(slot) = self.focus.slot().and_then(|i| self.slots.get(i)) {
            self.color = *slot;
        }
    }

    /// Overwrite slots from the front with `colors`; returns how many were written
    pub fn replace_slots(&mut self, colors: &[Color]) -> usize {
        let count = colors.len().min(self.slots.len());
        self.slots[..count].copy_from_slice(&colors[..count]);
        count
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub fn terminate(&mut self) {
        self.terminated = true;
    }
}
