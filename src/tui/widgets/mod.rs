mod help_footer;
mod input_line;
mod palette_strip;
mod preview;
mod slider;

pub use help_footer::render_help_footer;
pub use input_line::render_input_line;
pub use palette_strip::render_palette_strip;
pub use preview::{color_value_text, render_preview};
pub use slider::{marker_offset, render_sliders};
