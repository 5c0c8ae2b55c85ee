pub mod formatter;

pub use formatter::{format_button_list, should_use_colors};
