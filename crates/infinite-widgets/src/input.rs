//! Single-line text input with echo modes and a blinking cursor.
//!
//! [`Input`] is both a standalone prompt (Enter submits, Esc or Ctrl+C
//! cancels) and the editing child of [`Selection`](crate::selection::Selection)
//! and [`Autocomplete`](crate::autocomplete::Autocomplete).

use crate::prompt::{Prompt, Status};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use infinite_core::subscriptions::Every;
use infinite_core::{subscribe, Command, Component, Subscription, TerminalEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Default interval between cursor blink phases.
pub const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// How typed text is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EchoMode {
    /// Characters as typed.
    #[default]
    Normal,
    /// Every character replaced by the mask character.
    Password(char),
    /// Nothing at all.
    Hidden,
}

/// How the cursor is drawn while the input is focused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Blink,
    Static,
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Key(KeyEvent),
    Paste(String),
    /// Flip the blink phase.
    Blink,
}

pub struct Input {
    value: Vec<char>,
    cursor: usize,
    focus: bool,
    prompt: String,
    placeholder: String,
    char_limit: Option<usize>,
    echo_mode: EchoMode,
    cursor_mode: CursorMode,
    blink_speed: Duration,
    blink_on: bool,
    theme: Theme,
    status: Status,
    submitted: Option<String>,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    /// An empty, focused input with no prompt and no char limit.
    pub fn new() -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            focus: true,
            prompt: String::new(),
            placeholder: String::new(),
            char_limit: None,
            echo_mode: EchoMode::Normal,
            cursor_mode: CursorMode::Blink,
            blink_speed: DEFAULT_BLINK_SPEED,
            blink_on: true,
            theme: Theme::default(),
            status: Status::Active,
            submitted: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Maximum number of characters. `0` means unlimited.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = (limit > 0).then_some(limit);
        self.clamp_to_limit();
        self
    }

    pub fn with_echo_mode(mut self, mode: EchoMode) -> Self {
        self.echo_mode = mode;
        self
    }

    pub fn with_cursor_mode(mut self, mode: CursorMode) -> Self {
        self.cursor_mode = mode;
        self
    }

    pub fn with_blink_speed(mut self, speed: Duration) -> Self {
        self.blink_speed = speed;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Start with `value` in the buffer and the cursor at its end.
    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn focus(&mut self) {
        self.focus = true;
        self.blink_on = true;
    }

    pub fn focused(&self) -> bool {
        self.focus
    }

    pub fn blur(&mut self) {
        self.focus = false;
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replace the buffer, truncated to the char limit, with the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        if !self.focus {
            return;
        }
        self.value = value.chars().collect();
        self.clamp_to_limit();
        self.cursor = self.value.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to `pos`, clamped to the buffer length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.value.len());
    }

    pub fn reset(&mut self) {
        if !self.focus {
            return;
        }
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn echo_mode(&self) -> EchoMode {
        self.echo_mode
    }

    pub fn set_echo_mode(&mut self, mode: EchoMode) {
        if self.focus {
            self.echo_mode = mode;
        }
    }

    pub fn char_limit(&self) -> Option<usize> {
        self.char_limit
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.focus || self.at_limit() {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Backspace.
    pub fn delete_backward(&mut self) {
        if !self.focus || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.value.remove(self.cursor);
    }

    pub fn delete_forward(&mut self) {
        if !self.focus || self.cursor >= self.value.len() {
            return;
        }
        self.value.remove(self.cursor);
    }

    pub fn move_left(&mut self) {
        if self.focus {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if self.focus && self.cursor < self.value.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        if self.focus {
            self.cursor = 0;
        }
    }

    pub fn move_end(&mut self) {
        if self.focus {
            self.cursor = self.value.len();
        }
    }

    pub fn kill_to_start(&mut self) {
        if self.focus {
            self.value.drain(..self.cursor);
            self.cursor = 0;
        }
    }

    pub fn kill_to_end(&mut self) {
        if self.focus {
            self.value.truncate(self.cursor);
        }
    }

    /// Insert pasted text at the cursor. Line breaks are dropped and the
    /// char limit cuts off whatever does not fit.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            if self.at_limit() {
                break;
            }
            self.insert_char(c);
        }
    }

    /// The buffer as it appears on screen under the current echo mode.
    pub fn display_value(&self) -> String {
        match self.echo_mode {
            EchoMode::Normal => self.value(),
            EchoMode::Password(mask) => mask.to_string().repeat(self.value.len()),
            EchoMode::Hidden => String::new(),
        }
    }

    fn at_limit(&self) -> bool {
        self.char_limit.is_some_and(|limit| self.value.len() >= limit)
    }

    fn clamp_to_limit(&mut self) {
        if let Some(limit) = self.char_limit {
            self.value.truncate(limit);
            self.cursor = self.cursor.min(self.value.len());
        }
    }

    fn cursor_shown(&self) -> bool {
        self.focus
            && !self.status.is_finished()
            && match self.cursor_mode {
                CursorMode::Blink => self.blink_on,
                CursorMode::Static => true,
                CursorMode::Hide => false,
            }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                self.submitted = Some(self.value());
                self.status = Status::Submitted;
            }
            KeyCode::Esc => self.status = Status::Cancelled,
            KeyCode::Char('c') if ctrl => self.status = Status::Cancelled,
            KeyCode::Char('a') if ctrl => self.move_start(),
            KeyCode::Char('e') if ctrl => self.move_end(),
            KeyCode::Char('b') if ctrl => self.move_left(),
            KeyCode::Char('f') if ctrl => self.move_right(),
            KeyCode::Char('d') if ctrl => self.delete_forward(),
            KeyCode::Char('u') if ctrl => self.kill_to_start(),
            KeyCode::Char('k') if ctrl => self.kill_to_end(),
            KeyCode::Char(c)
                if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
            {
                self.insert_char(c)
            }
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_start(),
            KeyCode::End => self.move_end(),
            _ => {}
        }
    }
}

/// First and one-past-last char of `chars` that fit in `available` columns
/// while keeping the cell at `cursor` visible.
fn visible_window(chars: &[char], cursor: usize, available: usize) -> (usize, usize) {
    let width = |c: &char| c.width().unwrap_or(0);
    let mut used: usize =
        chars[..cursor].iter().map(width).sum::<usize>() + chars.get(cursor).map_or(1, width);
    let mut start = 0;
    while used > available && start < cursor {
        used -= width(&chars[start]);
        start += 1;
    }
    let mut end = (cursor + 1).min(chars.len());
    while end < chars.len() && used + width(&chars[end]) <= available {
        used += width(&chars[end]);
        end += 1;
    }
    (start, end)
}

impl Component for Input {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if self.status.is_finished() || !self.focus {
            return Command::none();
        }
        match msg {
            Message::Key(key) => {
                self.handle_key(key);
                self.blink_on = true;
            }
            Message::Paste(text) => {
                self.insert_str(&text);
                self.blink_on = true;
            }
            Message::Blink => {
                if self.cursor_mode == CursorMode::Blink {
                    self.blink_on = !self.blink_on;
                }
            }
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let mut spans = Vec::new();
        if !self.prompt.is_empty() {
            spans.push(Span::styled(self.prompt.clone(), self.theme.prompt));
        }
        let available = (area.width as usize)
            .saturating_sub(self.prompt.width())
            .max(1);
        let show_cursor = self.cursor_shown();

        if self.value.is_empty() && !self.placeholder.is_empty() {
            let mut rest = self.placeholder.chars();
            if show_cursor {
                if let Some(first) = rest.next() {
                    spans.push(Span::styled(first.to_string(), self.theme.input_cursor));
                }
            }
            spans.push(Span::styled(rest.collect::<String>(), self.theme.placeholder));
        } else {
            let shown: Vec<char> = self.display_value().chars().collect();
            let cursor = self.cursor.min(shown.len());
            let (start, end) = visible_window(&shown, cursor, available);

            let before: String = shown[start..cursor].iter().collect();
            spans.push(Span::styled(before, self.theme.input_text));
            let at = shown.get(cursor).copied();
            if show_cursor {
                spans.push(Span::styled(
                    at.unwrap_or(' ').to_string(),
                    self.theme.input_cursor,
                ));
            } else if let Some(c) = at {
                spans.push(Span::styled(c.to_string(), self.theme.input_text));
            }
            if cursor < end {
                let after: String = shown[cursor + 1..end].iter().collect();
                spans.push(Span::styled(after, self.theme.input_text));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.focus && !self.status.is_finished() && self.cursor_mode == CursorMode::Blink {
            vec![subscribe(Every::new(self.blink_speed, "input-blink")).map(|_| Message::Blink)]
        } else {
            vec![]
        }
    }
}

impl Prompt for Input {
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
        self.submitted.take()
    }

    fn height(&self) -> u16 {
        1
    }

    fn summary(&self) -> Option<Line<'static>> {
        if self.status != Status::Submitted {
            return None;
        }
        Some(Line::from(vec![
            Span::styled(self.prompt.clone(), self.theme.prompt),
            Span::styled(self.display_value(), self.theme.answer),
        ]))
    }
}
