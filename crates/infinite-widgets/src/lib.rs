//! Interactive prompt widgets for **infinite**.
//!
//! Every widget implements [`infinite_core::Component`], so it can be embedded
//! in any [`infinite_core::Model`]. The standalone ones also implement
//! [`Prompt`](prompt::Prompt) and can be run on their own until they reach a
//! terminal state.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`selection`] | Filterable, paged, single or multi select list |
//! | [`input`] | Single-line text input with echo modes |
//! | [`spinner`] | Animated spinner for background work |
//! | [`progress`] | Determinate progress bar with elapsed time readout |
//! | [`autocomplete`] | Text input with computed suggestions |
//! | [`confirm`] | Yes/no question |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`key`] | Key bindings and keymaps |
//! | [`help`] | One-line short help built from a keymap |
//! | [`page`] | Cursor and visible window over a list |
//! | [`theme`] | Styles shared by the widgets |

pub mod autocomplete;
pub mod confirm;
pub mod help;
pub mod input;
pub mod key;
pub mod page;
pub mod progress;
pub mod prompt;
pub mod selection;
pub mod spinner;
pub mod theme;

pub use prompt::{Prompt, Status};
pub use theme::Theme;

#[cfg(test)]
pub(crate) mod testutil {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use infinite_core::testing::buffer_to_string;
    use infinite_core::Component;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    /// Draw `component` over the whole of a `width` x `height` buffer.
    pub fn render(component: &impl Component, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| component.view(frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }
}
