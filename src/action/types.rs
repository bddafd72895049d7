use crate::editor::Mode;

/// Actions that can be performed in the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Channel adjustment
    Decrease,
    Increase,

    // Focus
    FocusPrev,
    FocusNext,

    // Palette
    PushToSlot,
    PullFromSlot,
    Save,

    // Mode switching
    EnterInputMode,

    // Input line
    InsertChar(char),
    DeleteChar,
    Confirm,
    Cancel,

    // Other
    Quit,
}

impl Action {
    /// Whether the action does anything in `mode`
    pub fn applies_in(&self, mode: Mode) -> bool {
        let input_action = matches!(
            self,
            Action::InsertChar(_) | Action::DeleteChar | Action::Confirm | Action::Cancel
        );
        match mode {
            Mode::Normal => !input_action,
            Mode::Input => input_action,
        }
    }

    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Decrease" => Some(Action::Decrease),
            "Increase" => Some(Action::Increase),
            "FocusPrev" => Some(Action::FocusPrev),
            "FocusNext" => Some(Action::FocusNext),
            "PushToSlot" => Some(Action::PushToSlot),
            "PullFromSlot" => Some(Action::PullFromSlot),
            "Save" => Some(Action::Save),
            "EnterInputMode" => Some(Action::EnterInputMode),
            "DeleteChar" => Some(Action::DeleteChar),
            "Confirm" => Some(Action::Confirm),
            "Cancel" => Some(Action::Cancel),
            "Quit" => Some(Action::Quit),
            "None" => None, // Disables a binding
            _ => None,
        }
    }
}
