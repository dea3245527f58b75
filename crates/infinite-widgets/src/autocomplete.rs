//! Text input with a list of suggestions computed from what has been typed.
//!
//! Every edit asks the [`Suggester`] for candidates given the current text
//! and cursor, and rebuilds the suggestion list from them. Up, Down and Tab
//! move through the suggestions. Enter applies the highlighted suggestion
//! through the [`Completer`]; with no suggestion shown, Enter submits the
//! typed text. Esc hides the suggestions, or cancels once they are hidden.
//!
//! ```rust,ignore
//! let words = ["apple", "apricot", "banana"];
//! let ac = Autocomplete::new(move |text: &str, _cursor: usize| {
//!     words.iter().filter(|w| w.starts_with(text)).map(|w| w.to_string()).collect()
//! });
//! ```

use crate::input::{self, Input};
use crate::prompt::{Prompt, Status};
use crate::selection::{Selection, DEFAULT_PAGE_SIZE};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use infinite_core::{Command, Component, Subscription, TerminalEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

/// Candidates for `(text, cursor)`.
pub type Suggester = Box<dyn Fn(&str, usize) -> Vec<String> + Send>;

/// New buffer and cursor after applying `suggestion` to `(text, cursor)`.
pub type Completer = Box<dyn Fn(&str, usize, &str) -> (String, usize) + Send>;

/// Replace the whole buffer with the suggestion and put the cursor at its end.
pub fn replace_all(_text: &str, _cursor: usize, suggestion: &str) -> (String, usize) {
    (suggestion.to_string(), suggestion.chars().count())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Key(KeyEvent),
    Paste(String),
    Blink,
}

pub struct Autocomplete {
    input: Input,
    suggestions: Selection,
    suggester: Suggester,
    completer: Completer,
    visible: bool,
    page_size: usize,
    theme: Theme,
    status: Status,
    answer: Option<String>,
}

impl Autocomplete {
    pub fn new(suggester: impl Fn(&str, usize) -> Vec<String> + Send + 'static) -> Self {
        Self {
            input: Input::new(),
            suggestions: suggestion_list(DEFAULT_PAGE_SIZE, &Theme::default()),
            suggester: Box::new(suggester),
            completer: Box::new(replace_all),
            visible: false,
            page_size: DEFAULT_PAGE_SIZE,
            theme: Theme::default(),
            status: Status::Active,
            answer: None,
        }
    }

    pub fn with_completer(
        mut self,
        completer: impl Fn(&str, usize, &str) -> (String, usize) + Send + 'static,
    ) -> Self {
        self.completer = Box::new(completer);
        self
    }

    /// Replace the text input, e.g. to set a prompt or placeholder.
    pub fn with_input(mut self, input: Input) -> Self {
        self.input = input;
        self
    }

    /// Suggestion rows shown at once. Values below one are raised to one.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self.suggestions = suggestion_list(self.page_size, &self.theme);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.input = std::mem::take(&mut self.input).with_theme(theme.clone());
        self.suggestions = suggestion_list(self.page_size, &theme);
        self.theme = theme;
        self
    }

    pub fn value(&self) -> String {
        self.input.value()
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn suggestions(&self) -> &Selection {
        &self.suggestions
    }

    /// Whether the suggestion list is drawn and takes Enter.
    pub fn suggestions_visible(&self) -> bool {
        self.visible && self.suggestions.filtered_len() > 0
    }

    fn refresh(&mut self) {
        let text = self.input.value();
        let candidates = (self.suggester)(&text, self.input.cursor());
        self.suggestions.set_choices(candidates);
        self.visible = true;
    }

    fn complete(&mut self) {
        let Some(choice) = self.suggestions.current() else {
            return;
        };
        let (text, cursor) = (self.completer)(&self.input.value(), self.input.cursor(), &choice.text);
        self.input.set_value(&text);
        self.input.set_cursor(cursor);
        self.visible = false;
    }

    fn submit(&mut self) {
        self.answer = Some(self.input.value());
        self.status = Status::Submitted;
        self.input.blur();
    }

    fn cancel(&mut self) {
        self.status = Status::Cancelled;
        self.input.blur();
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.cancel(),
            KeyCode::Esc if self.suggestions_visible() => self.visible = false,
            KeyCode::Esc => self.cancel(),
            KeyCode::Enter if self.suggestions_visible() => self.complete(),
            KeyCode::Enter => self.submit(),
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::PageUp | KeyCode::PageDown
                if !self.visible =>
            {
                self.visible = true
            }
            KeyCode::Up => self.suggestions.move_up(),
            KeyCode::Down | KeyCode::Tab => self.suggestions.move_down(),
            KeyCode::PageUp => self.suggestions.page_up(),
            KeyCode::PageDown => self.suggestions.page_down(),
            _ => return self.edit(input::Message::Key(key)),
        }
        Command::none()
    }

    fn edit(&mut self, msg: input::Message) -> Command<Message> {
        let before = (self.input.value(), self.input.cursor());
        let cmd = self.input.update(msg).map(|_| Message::Blink);
        if (self.input.value(), self.input.cursor()) != before {
            self.refresh();
        }
        cmd
    }

    fn page_rows(&self) -> u16 {
        u16::try_from(self.page_size).unwrap_or(u16::MAX)
    }
}

fn suggestion_list(page_size: usize, theme: &Theme) -> Selection {
    Selection::new(Vec::<String>::new())
        .with_filter(false)
        .with_header(false)
        .with_help(false)
        .with_page_size(page_size)
        .with_theme(theme.clone())
}

impl Component for Autocomplete {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if self.status.is_finished() {
            return Command::none();
        }
        match msg {
            Message::Key(key) => self.handle_key(key),
            Message::Paste(text) => self.edit(input::Message::Paste(text)),
            Message::Blink => self.input.update(input::Message::Blink).map(|_| Message::Blink),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        self.input.view(frame, Rect::new(area.x, area.y, area.width, 1));
        if self.suggestions_visible() && area.height > 1 {
            let rows = self.page_rows().min(area.height - 1);
            self.suggestions
                .render_rows(frame, Rect::new(area.x, area.y + 1, area.width, rows));
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        self.input
            .subscriptions()
            .into_iter()
            .map(|sub| sub.map(|_| Message::Blink))
            .collect()
    }
}

impl Prompt for Autocomplete {
    type Output = String;

    fn map_event(event: TerminalEvent) -> Option<Message> {
        match event {
            TerminalEvent::Key(key) => Some(Message::Key(key)),
            TerminalEvent::Paste(text) => Some(Message::Paste(text)),
            TerminalEvent::Resize(..) => None,
        }
    }

    fn status(&self) -> Status {
        self.status
    }

    fn outcome(&mut self) -> Option<String> {
        self.answer.take()
    }

    fn height(&self) -> u16 {
        self.page_rows().saturating_add(1)
    }

    fn summary(&self) -> Option<Line<'static>> {
        let answer = self.answer.as_ref()?;
        Some(Line::from(vec![
            Span::styled(self.input.prompt().to_string(), self.theme.prompt),
            Span::styled(answer.clone(), self.theme.answer),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ctrl, key, render};

    const WORDS: [&str; 5] = ["apple", "apricot", "avocado", "banana", "blueberry"];

    fn prefix_suggester(text: &str, _cursor: usize) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }
        WORDS
            .iter()
            .filter(|w| w.starts_with(text))
            .map(|w| w.to_string())
            .collect()
    }

    fn typed(text: &str) -> Autocomplete {
        let mut ac = Autocomplete::new(prefix_suggester);
        for c in text.chars() {
            ac.update(Message::Key(key(KeyCode::Char(c))));
        }
        ac
    }

    fn texts(ac: &Autocomplete) -> Vec<String> {
        ac.suggestions().filtered().map(|c| c.text.clone()).collect()
    }

    #[test]
    fn typing_rebuilds_suggestions() {
        let mut ac = typed("a");
        assert_eq!(texts(&ac), ["apple", "apricot", "avocado"]);
        ac.update(Message::Key(key(KeyCode::Char('p'))));
        assert_eq!(texts(&ac), ["apple", "apricot"]);
        assert!(ac.suggestions_visible());
    }

    #[test]
    fn rebuild_resets_cursor() {
        let mut ac = typed("a");
        ac.update(Message::Key(key(KeyCode::Down)));
        assert_eq!(ac.suggestions().cursor(), 1);
        ac.update(Message::Key(key(KeyCode::Char('p'))));
        assert_eq!(ac.suggestions().cursor(), 0);
    }

    #[test]
    fn suggester_sees_text_and_cursor() {
        let mut ac = Autocomplete::new(|text: &str, cursor: usize| vec![format!("{text}@{cursor}")]);
        ac.update(Message::Key(key(KeyCode::Char('x'))));
        ac.update(Message::Key(key(KeyCode::Char('y'))));
        ac.update(Message::Key(key(KeyCode::Left)));
        assert_eq!(texts(&ac), ["xy@1"]);
    }

    #[test]
    fn enter_applies_highlighted_suggestion() {
        let mut ac = typed("ap");
        ac.update(Message::Key(key(KeyCode::Tab)));
        ac.update(Message::Key(key(KeyCode::Enter)));
        assert_eq!(ac.value(), "apricot");
        assert_eq!(ac.input().cursor(), 7);
        assert!(!ac.suggestions_visible());
        assert_eq!(ac.status(), Status::Active);

        ac.update(Message::Key(key(KeyCode::Enter)));
        assert_eq!(ac.status(), Status::Submitted);
        assert_eq!(ac.outcome().as_deref(), Some("apricot"));
    }

    #[test]
    fn enter_without_suggestions_submits_raw_text() {
        let mut ac = typed("kiwi");
        assert!(!ac.suggestions_visible());
        ac.update(Message::Key(key(KeyCode::Enter)));
        assert_eq!(ac.outcome().as_deref(), Some("kiwi"));
    }

    #[test]
    fn custom_completer() {
        let mut ac = Autocomplete::new(prefix_suggester).with_completer(|text, cursor, s| {
            let done = format!("{text}|{s}");
            (done, cursor)
        });
        for c in "ba".chars() {
            ac.update(Message::Key(key(KeyCode::Char(c))));
        }
        ac.update(Message::Key(key(KeyCode::Enter)));
        assert_eq!(ac.value(), "ba|banana");
        assert_eq!(ac.input().cursor(), 2);
    }

    #[test]
    fn esc_hides_then_cancels() {
        let mut ac = typed("b");
        ac.update(Message::Key(key(KeyCode::Esc)));
        assert!(!ac.suggestions_visible());
        assert_eq!(ac.status(), Status::Active);

        ac.update(Message::Key(key(KeyCode::Down)));
        assert!(ac.suggestions_visible());
        assert_eq!(ac.suggestions().cursor(), 0);

        ac.update(Message::Key(key(KeyCode::Esc)));
        ac.update(Message::Key(key(KeyCode::Esc)));
        assert_eq!(ac.status(), Status::Cancelled);
        assert_eq!(ac.outcome(), None);
    }

    #[test]
    fn ctrl_c_cancels_and_freezes() {
        let mut ac = typed("a");
        ac.update(Message::Key(ctrl('c')));
        assert_eq!(ac.status(), Status::Cancelled);
        ac.update(Message::Key(key(KeyCode::Char('z'))));
        assert_eq!(ac.value(), "a");
    }

    #[test]
    fn paste_refreshes() {
        let mut ac = Autocomplete::new(prefix_suggester);
        ac.update(Message::Paste("blue".into()));
        assert_eq!(texts(&ac), ["blueberry"]);
    }

    #[test]
    fn height_covers_input_and_page() {
        assert_eq!(Autocomplete::new(prefix_suggester).height(), 6);
        assert_eq!(Autocomplete::new(prefix_suggester).with_page_size(3).height(), 4);
        assert_eq!(Autocomplete::new(prefix_suggester).with_page_size(65535).height(), u16::MAX);
    }

    #[test]
    fn zero_page_size_still_shows_one_suggestion() {
        let mut ac = Autocomplete::new(prefix_suggester)
            .with_page_size(0)
            .with_input(Input::new().with_cursor_mode(input::CursorMode::Hide));
        assert_eq!(ac.height(), 2);
        ac.update(Message::Key(key(KeyCode::Char('b'))));
        let screen = render(&ac, 12, 2);
        assert_eq!(screen, "b           \n> banana    ");
    }

    #[test]
    fn renders_input_and_suggestions() {
        let mut ac = Autocomplete::new(prefix_suggester)
            .with_input(Input::new().with_cursor_mode(input::CursorMode::Hide));
        ac.update(Message::Key(key(KeyCode::Char('b'))));
        let screen = render(&ac, 12, 3);
        assert_eq!(screen, "b           \n> banana    \n  blueberry ");
    }
}
