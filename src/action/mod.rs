mod command;
mod dispatcher;
mod handler;
mod types;

pub use command::{parse_channel_value, InputCommand, SAVE_PREFIX};
pub use dispatcher::ActionDispatcher;
pub use handler::{ActionHandler, SAVE_ERROR_MESSAGE, SAVE_OK_MESSAGE};
pub use types::Action;
