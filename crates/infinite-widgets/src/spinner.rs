//! Animated spinner shown while background work runs.

use crate::prompt::{Prompt, Status};
use crate::theme::{palette, Theme};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use infinite_core::subscriptions::Every;
use infinite_core::{subscribe, Command, Component, Subscription, TerminalEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Duration;

/// Built-in frame sets.
pub mod frames {
    pub const LINE: &[&str] = &["|", "/", "-", "\\"];
    pub const DOT: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
    pub const MINI_DOT: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    pub const JUMP: &[&str] = &["⢄", "⢂", "⢁", "⡁", "⡈", "⡐", "⡠"];
    pub const PULSE: &[&str] = &["█", "▓", "▒", "░"];
    pub const POINTS: &[&str] = &["∙∙∙", "●∙∙", "∙●∙", "∙∙●"];
    pub const GLOBE: &[&str] = &["🌍", "🌎", "🌏"];
    pub const MOON: &[&str] = &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];
    pub const METER: &[&str] = &["▱▱▱", "▰▱▱", "▰▰▱", "▰▰▰", "▰▰▱", "▰▱▱", "▱▱▱"];
    pub const ELLIPSIS: &[&str] = &["", ".", "..", "..."];
}

/// Named frame sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shape {
    #[default]
    Line,
    Dot,
    MiniDot,
    Jump,
    Pulse,
    Points,
    Globe,
    Moon,
    Meter,
    Ellipsis,
}

impl Shape {
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Shape::Line => frames::LINE,
            Shape::Dot => frames::DOT,
            Shape::MiniDot => frames::MINI_DOT,
            Shape::Jump => frames::JUMP,
            Shape::Pulse => frames::PULSE,
            Shape::Points => frames::POINTS,
            Shape::Globe => frames::GLOBE,
            Shape::Moon => frames::MOON,
            Shape::Meter => frames::METER,
            Shape::Ellipsis => frames::ELLIPSIS,
        }
    }

    /// Frame interval that suits the shape.
    pub fn interval(self) -> Duration {
        match self {
            Shape::Line | Shape::MiniDot => Duration::from_millis(100),
            Shape::Dot | Shape::Jump => Duration::from_millis(100),
            Shape::Pulse | Shape::Meter => Duration::from_millis(140),
            Shape::Points => Duration::from_millis(140),
            Shape::Globe | Shape::Ellipsis => Duration::from_millis(250),
            Shape::Moon => Duration::from_millis(125),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Advance one frame.
    Tick,
    /// Replace the text next to the spinner.
    SetPrompt(String),
    /// Print a line above the spinner.
    Println(String),
    /// Stop, optionally leaving `message` in place of the spinner.
    Finish(Option<String>),
    Key(KeyEvent),
}

pub struct Spinner {
    frames: &'static [&'static str],
    frame_index: usize,
    interval: Duration,
    prompt: String,
    done_message: Option<String>,
    theme: Theme,
    status: Status,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    /// A line spinner with the prompt `Loading...`.
    pub fn new() -> Self {
        Self::with_shape(Shape::Line)
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self {
            frames: shape.frames(),
            frame_index: 0,
            interval: shape.interval(),
            prompt: "Loading...".into(),
            done_message: None,
            theme: Theme::default(),
            status: Status::Active,
        }
    }

    /// Use custom frames. An empty slice renders no frame.
    pub fn with_frames(mut self, frames: &'static [&'static str]) -> Self {
        self.frames = frames;
        self.frame_index = 0;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn frame(&self) -> &'static str {
        self.frames.get(self.frame_index).copied().unwrap_or("")
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

impl Component for Spinner {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if self.status.is_finished() {
            return Command::none();
        }
        match msg {
            Message::Tick => {
                if !self.frames.is_empty() {
                    self.frame_index = (self.frame_index + 1) % self.frames.len();
                }
            }
            Message::SetPrompt(prompt) => self.prompt = prompt,
            Message::Println(line) => return Command::println(line),
            Message::Finish(message) => {
                self.done_message = message;
                self.status = Status::Submitted;
            }
            Message::Key(key) => {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || key.code == KeyCode::Esc {
                    self.status = Status::Cancelled;
                }
            }
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let line = Line::from(vec![
            Span::styled(self.frame(), self.theme.spinner_shape),
            Span::raw(" "),
            Span::styled(self.prompt.clone(), self.theme.prompt),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.status.is_finished() {
            return vec![];
        }
        vec![subscribe(Every::new(self.interval, "spinner")).map(|_| Message::Tick)]
    }
}

impl Prompt for Spinner {
    type Output = ();

    fn map_event(event: TerminalEvent) -> Option<Message> {
        match event {
            TerminalEvent::Key(key) => Some(Message::Key(key)),
            _ => None,
        }
    }

    fn status(&self) -> Status {
        self.status
    }

    fn outcome(&mut self) -> Option<()> {
        (self.status == Status::Submitted).then_some(())
    }

    fn height(&self) -> u16 {
        1
    }

    fn summary(&self) -> Option<Line<'static>> {
        if self.status != Status::Submitted {
            return None;
        }
        let text = self.done_message.clone().unwrap_or_else(|| self.prompt.clone());
        Some(Line::from(vec![
            Span::styled("✓", Style::default().fg(palette::SPECIAL)),
            Span::raw(" "),
            Span::styled(text, self.theme.prompt),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ctrl, key, render};

    #[test]
    fn defaults() {
        let spinner = Spinner::new();
        assert_eq!(spinner.prompt(), "Loading...");
        assert_eq!(spinner.frame(), "|");
        assert_eq!(spinner.subscriptions().len(), 1);
    }

    #[test]
    fn tick_cycles_frames() {
        let mut spinner = Spinner::new();
        let seen: Vec<&str> = (0..5)
            .map(|_| {
                spinner.update(Message::Tick);
                spinner.frame()
            })
            .collect();
        assert_eq!(seen, ["/", "-", "\\", "|", "/"]);
    }

    #[test]
    fn every_shape_has_frames() {
        for shape in [
            Shape::Line,
            Shape::Dot,
            Shape::MiniDot,
            Shape::Jump,
            Shape::Pulse,
            Shape::Points,
            Shape::Globe,
            Shape::Moon,
            Shape::Meter,
            Shape::Ellipsis,
        ] {
            assert!(!shape.frames().is_empty(), "{shape:?}");
        }
    }

    #[test]
    fn empty_frames_do_not_panic() {
        let mut spinner = Spinner::new().with_frames(&[]);
        spinner.update(Message::Tick);
        assert_eq!(spinner.frame(), "");
    }

    #[test]
    fn set_prompt_and_println() {
        let mut spinner = Spinner::new();
        spinner.update(Message::SetPrompt("Fetching".into()));
        assert_eq!(spinner.prompt(), "Fetching");
        let cmd = spinner.update(Message::Println("step 1 ok".into()));
        assert!(!cmd.is_none());
    }

    #[test]
    fn finish_stops_ticking() {
        let mut spinner = Spinner::new().with_prompt("Working");
        spinner.update(Message::Finish(Some("Done".into())));
        assert_eq!(spinner.status(), Status::Submitted);
        assert!(spinner.subscriptions().is_empty());
        spinner.update(Message::Tick);
        assert_eq!(spinner.frame_index(), 0);
        assert_eq!(spinner.outcome(), Some(()));
        let summary = spinner.summary().map(|l| l.to_string());
        assert_eq!(summary.as_deref(), Some("✓ Done"));
    }

    #[test]
    fn user_cancel() {
        let mut spinner = Spinner::new();
        spinner.update(Message::Key(ctrl('c')));
        assert_eq!(spinner.status(), Status::Cancelled);
        assert_eq!(spinner.outcome(), None);

        let mut spinner = Spinner::new();
        spinner.update(Message::Key(key(KeyCode::Esc)));
        assert!(spinner.is_finished());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut spinner = Spinner::new();
        spinner.update(Message::Key(key(KeyCode::Enter)));
        assert_eq!(spinner.status(), Status::Active);
    }

    #[test]
    fn renders_frame_and_prompt() {
        let spinner = Spinner::new();
        assert_eq!(render(&spinner, 14, 1), "| Loading...  ");
    }
}
