use crossterm::event::KeyEvent;

/// Terminal events delivered by the
/// [`terminal_events`](crate::subscriptions::terminal_events) subscription.
///
/// Mouse and focus reporting are never enabled by the runtime, so those
/// crossterm events are dropped during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Convert a raw crossterm event, keeping only the kinds prompts consume.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event, KeyEventKind};
        match event {
            // Windows reports both press and release; prompts act on press only.
            Event::Key(k) if k.kind != KeyEventKind::Release => Some(TerminalEvent::Key(k)),
            Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            Event::Paste(s) => Some(TerminalEvent::Paste(s)),
            _ => None,
        }
    }
}
