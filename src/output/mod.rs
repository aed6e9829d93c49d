//! Printing rendered lines to a terminal or pipe.

mod terminal;

pub use terminal::{should_use_color, to_crossterm_color, write_lines};
