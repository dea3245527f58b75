//! The capability every standalone prompt widget shares.

use infinite_core::{Component, TerminalEvent};
use ratatui::text::Line;

/// Where a prompt is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    /// Still accepting input.
    #[default]
    Active,
    /// Finished with an answer.
    Submitted,
    /// The user gave up. No answer.
    Cancelled,
}

impl Status {
    pub fn is_finished(self) -> bool {
        self != Status::Active
    }
}

/// A [`Component`] that can run on its own until it reaches a terminal state.
///
/// The driver feeds terminal events through [`map_event`](Prompt::map_event),
/// redraws after every update and stops once
/// [`is_finished`](Prompt::is_finished) turns true. After that, every message
/// is ignored by the widget.
pub trait Prompt: Component {
    /// What the user answered.
    type Output: Send + 'static;

    /// Translate a terminal event into this widget's message, if it cares.
    fn map_event(event: TerminalEvent) -> Option<Self::Message>;

    /// Current lifecycle state.
    fn status(&self) -> Status;

    fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Take the answer. `None` while active, after a cancel, or once taken.
    fn outcome(&mut self) -> Option<Self::Output>;

    /// Rows the widget needs to draw itself.
    fn height(&self) -> u16;

    /// A line left in the scrollback once the prompt finishes.
    fn summary(&self) -> Option<Line<'static>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_is_unfinished() {
        assert!(!Status::Active.is_finished());
        assert!(Status::Submitted.is_finished());
        assert!(Status::Cancelled.is_finished());
        assert_eq!(Status::default(), Status::Active);
    }
}
