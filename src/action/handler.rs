use std::path::Path;

use crate::color::Adjust;
use crate::editor::{EditorState, FocusDirection, Mode, Status};
use crate::palette::PaletteCodec;

use super::command::{parse_channel_value, InputCommand};
use super::Action;

/// Status shown after a successful save
pub const SAVE_OK_MESSAGE: &str = "Saved file.";

/// Status shown when the palette file cannot be written
pub const SAVE_ERROR_MESSAGE: &str = "Error writing file.";

/// Applies actions to the editor state
pub struct ActionHandler;

impl ActionHandler {
    /// Handle an action. `palette_path` is the target of the save key.
    pub fn handle(state: &mut EditorState, action: Action, palette_path: &Path) {
        match state.mode() {
            Mode::Normal => Self::handle_normal(state, action, palette_path),
            Mode::Input => Self::handle_input(state, action),
        }
    }

    fn handle_normal(state: &mut EditorState, action: Action, palette_path: &Path) {
        match action {
            Action::Quit => state.terminate(),
            Action::EnterInputMode => state.enter_input_mode(),
            Action::Decrease => state.adjust_focused_channel(Adjust::Decrease),
            Action::Increase => state.adjust_focused_channel(Adjust::Increase),
            Action::FocusPrev => state.move_focus(FocusDirection::Prev),
            Action::FocusNext => state.move_focus(FocusDirection::Next),
            Action::PushToSlot => state.write_slot_from_current(),
            Action::PullFromSlot => state.read_slot_into_current(),
            Action::Save => Self::save_palette(state, palette_path),
            other => tracing::debug!(action = ?other, "Ignored in normal mode"),
        }
    }

    fn handle_input(state: &mut EditorState, action: Action) {
        match action {
            Action::Cancel => state.cancel_input(),
            Action::DeleteChar => state.backspace_input(),
            Action::InsertChar(c) => state.append_input_char(c),
            Action::Confirm => Self::commit_input(state),
            other => tracing::debug!(action = ?other, "Ignored in input mode"),
        }
    }

    /// Apply the input line, then always return to normal mode.
    ///
    /// A valid number sets the focused slider. Anything else is tried as a
    /// command; unrecognized text is dropped without changing the status.
    fn commit_input(state: &mut EditorState) {
        let text = state.input().to_string();
        let value = parse_channel_value(&text);

        match (state.focus().channel(), value) {
            (Some(channel), Some(value)) => {
                tracing::debug!(%channel, value, "Set channel from input");
                state.set_channel_value(channel, value);
            }
            _ => match InputCommand::parse(&text) {
                Some(InputCommand::Save(path)) => Self::save_palette(state, &path),
                None => tracing::debug!(input = %text, "Unrecognized input"),
            },
        }

        state.cancel_input();
    }

    /// Write the palette and report the outcome in the status line
    fn save_palette(state: &mut EditorState, path: &Path) {
        match PaletteCodec::save(path, state.slots()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Saved palette");
                state.set_status(Status::info(SAVE_OK_MESSAGE));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to save palette");
                state.set_status(Status::error(SAVE_ERROR_MESSAGE));
            }
        }
    }
}
