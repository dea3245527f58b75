//! Colors and text styles shared by every prompt widget.
//!
//! A [`Theme`] is a plain value: build one, tweak the fields you care about
//! and hand it to each widget. There is no global default to mutate.

use ratatui::style::{Color, Modifier, Style};

/// Named colors used by [`Theme::default`].
pub mod palette {
    use ratatui::style::Color;

    /// Green used for the selected-hint symbol and success marks.
    pub const SPECIAL: Color = Color::Rgb(0x73, 0xF5, 0x9F);
    /// Purple used for the highlighted row and answers.
    pub const HIGHLIGHT: Color = Color::Rgb(0x7D, 0x56, 0xF4);
    /// Used for spinner frames.
    pub const RED_PINK: Color = Color::Rgb(0xFF, 0x5F, 0x87);
    /// Dim gray for placeholders and help descriptions.
    pub const GRAY: Color = Color::Indexed(240);
    pub const PROGRESS_FULL: Color = Color::Rgb(0x75, 0x71, 0xF9);
    pub const PROGRESS_EMPTY: Color = Color::Rgb(0x60, 0x60, 0x60);
}

/// Text styles applied by the widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// The question or label in front of a prompt.
    pub prompt: Style,
    /// The symbol marking the highlighted row.
    pub cursor_symbol: Style,
    /// Text of the highlighted row.
    pub choice_text: Style,
    /// Text of every other row.
    pub unchoice_text: Style,
    /// Hint symbol of a selected row in multi-select.
    pub hint_symbol: Style,
    /// Hint symbol of an unselected row in multi-select.
    pub unhint_symbol: Style,
    /// Typed text in an input.
    pub input_text: Style,
    /// The character under the input cursor while it is shown.
    pub input_cursor: Style,
    /// Placeholder shown in an empty input.
    pub placeholder: Style,
    pub spinner_shape: Style,
    pub progress_full: Style,
    pub progress_empty: Style,
    /// The answer echoed in the summary line once a prompt finishes.
    pub answer: Style,
    /// Key labels in the help line.
    pub help_key: Style,
    /// Action descriptions in the help line.
    pub help_description: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prompt: Style::default().fg(Color::Cyan),
            cursor_symbol: Style::default().fg(palette::HIGHLIGHT),
            choice_text: Style::default()
                .fg(palette::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
            unchoice_text: Style::default(),
            hint_symbol: Style::default().fg(palette::SPECIAL),
            unhint_symbol: Style::default().fg(Color::Red),
            input_text: Style::default(),
            input_cursor: Style::default().add_modifier(Modifier::REVERSED),
            placeholder: Style::default().fg(palette::GRAY),
            spinner_shape: Style::default().fg(palette::RED_PINK),
            progress_full: Style::default().fg(palette::PROGRESS_FULL),
            progress_empty: Style::default().fg(palette::PROGRESS_EMPTY),
            answer: Style::default().fg(palette::HIGHLIGHT),
            help_key: Style::default().fg(Color::Gray),
            help_description: Style::default().fg(palette::GRAY),
        }
    }
}

impl Theme {
    /// A theme with every style reset, for terminals without color support.
    pub fn plain() -> Self {
        Self {
            prompt: Style::default(),
            cursor_symbol: Style::default(),
            choice_text: Style::default().add_modifier(Modifier::BOLD),
            unchoice_text: Style::default(),
            hint_symbol: Style::default(),
            unhint_symbol: Style::default(),
            input_text: Style::default(),
            input_cursor: Style::default().add_modifier(Modifier::REVERSED),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            spinner_shape: Style::default(),
            progress_full: Style::default(),
            progress_empty: Style::default(),
            answer: Style::default(),
            help_key: Style::default(),
            help_description: Style::default().add_modifier(Modifier::DIM),
        }
    }
}
