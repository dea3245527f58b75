//! Yes/no question.

use crate::prompt::{Prompt, Status};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use infinite_core::{Command, Component, TerminalEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Key(KeyEvent),
}

/// `y`/`n` answer immediately, Enter takes the default, Esc or Ctrl+C cancel.
pub struct Confirm {
    prompt: String,
    default: bool,
    theme: Theme,
    status: Status,
    answer: Option<bool>,
}

impl Confirm {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            default: false,
            theme: Theme::default(),
            status: Status::Active,
            answer: None,
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn default_answer(&self) -> bool {
        self.default
    }

    fn answer(&mut self, yes: bool) {
        self.answer = Some(yes);
        self.status = Status::Submitted;
    }

    fn hint(&self) -> &'static str {
        if self.default {
            "(Y/n)"
        } else {
            "(y/N)"
        }
    }
}

impl Component for Confirm {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if self.status.is_finished() {
            return Command::none();
        }
        let Message::Key(key) = msg;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.status = Status::Cancelled,
            KeyCode::Esc => self.status = Status::Cancelled,
            KeyCode::Char('y' | 'Y') => self.answer(true),
            KeyCode::Char('n' | 'N') => self.answer(false),
            KeyCode::Enter => self.answer(self.default),
            _ => {}
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let line = Line::from(vec![
            Span::styled(self.prompt.clone(), self.theme.prompt),
            Span::raw(" "),
            Span::styled(self.hint(), self.theme.placeholder),
            Span::raw(" "),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Prompt for Confirm {
    type Output = bool;

    fn map_event(event: TerminalEvent) -> Option<Message> {
        match event {
            TerminalEvent::Key(key) => Some(Message::Key(key)),
            _ => None,
        }
    }

    fn status(&self) -> Status {
        self.status
    }

    fn outcome(&mut self) -> Option<bool> {
        self.answer.take()
    }

    fn height(&self) -> u16 {
        1
    }

    fn summary(&self) -> Option<Line<'static>> {
        let yes = self.answer?;
        Some(Line::from(vec![
            Span::styled(self.prompt.clone(), self.theme.prompt),
            Span::raw(" "),
            Span::styled(if yes { "yes" } else { "no" }, self.theme.answer),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ctrl, key, render};

    fn press(c: &mut Confirm, code: KeyCode) {
        c.update(Message::Key(key(code)));
    }

    #[test]
    fn y_and_n_answer_immediately() {
        let mut c = Confirm::new("Continue?");
        press(&mut c, KeyCode::Char('y'));
        assert_eq!(c.outcome(), Some(true));

        let mut c = Confirm::new("Continue?").with_default(true);
        press(&mut c, KeyCode::Char('N'));
        assert_eq!(c.outcome(), Some(false));
    }

    #[test]
    fn enter_takes_default() {
        let mut c = Confirm::new("Continue?");
        press(&mut c, KeyCode::Enter);
        assert_eq!(c.outcome(), Some(false));

        let mut c = Confirm::new("Continue?").with_default(true);
        press(&mut c, KeyCode::Enter);
        assert_eq!(c.outcome(), Some(true));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut c = Confirm::new("Continue?");
        press(&mut c, KeyCode::Char('x'));
        press(&mut c, KeyCode::Left);
        assert_eq!(c.status(), Status::Active);
    }

    #[test]
    fn cancel_then_frozen() {
        let mut c = Confirm::new("Continue?");
        c.update(Message::Key(ctrl('c')));
        assert_eq!(c.status(), Status::Cancelled);
        press(&mut c, KeyCode::Char('y'));
        assert_eq!(c.outcome(), None);

        let mut c = Confirm::new("Continue?");
        press(&mut c, KeyCode::Esc);
        assert!(c.is_finished());
    }

    #[test]
    fn summary_after_answer() {
        let mut c = Confirm::new("Deploy?");
        assert!(c.summary().is_none());
        press(&mut c, KeyCode::Char('y'));
        assert_eq!(c.summary().map(|l| l.to_string()).as_deref(), Some("Deploy? yes"));
    }

    #[test]
    fn renders_hint() {
        let c = Confirm::new("Deploy?").with_default(true);
        assert_eq!(render(&c, 16, 1), "Deploy? (Y/n)   ");
    }
}
