mod focus;
mod input;
mod state;

pub use focus::{FocusDirection, FocusPosition};
pub use input::InputBuffer;
pub use state::{
    EditorState, Mode, Snapshot, Status, StatusLevel, DEFAULT_COLOR, DEFAULT_MAX_INPUT_LEN,
    DEFAULT_SLOTS,
};
