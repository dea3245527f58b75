//! Built-in subscription sources.
//!
//! - [`terminal_events`]: key, resize and paste events from the terminal.
//! - [`Every`]: a repeating timer, used for spinner frames and cursor blink.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
