//! Determinate progress bar with an optional elapsed time and throughput readout.

use crate::prompt::{Prompt, Status};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use infinite_core::subscriptions::Every;
use infinite_core::{subscribe, Command, Component, Subscription, TerminalEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::{Duration, Instant};

pub const DEFAULT_TOTAL: u64 = 100;
pub const DEFAULT_WIDTH: u16 = 40;
pub const FULL_CHAR: char = '█';
pub const EMPTY_CHAR: char = '░';

/// How often the cost readout refreshes.
const COST_REFRESH: Duration = Duration::from_millis(250);

/// Filled and empty glyph counts for a bar of `width` cells:
/// `filled = round(width * current / total)`.
pub fn bar_glyphs(width: u16, current: u64, total: u64) -> (usize, usize) {
    let width = width as usize;
    if total == 0 {
        return (0, width);
    }
    let ratio = current.min(total) as f64 / total as f64;
    let filled = ((width as f64) * ratio).round() as usize;
    let filled = filled.min(width);
    (filled, width - filled)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Add to the current value, clamped to the total.
    Incr(u64),
    /// Set the current value, clamped to the total.
    Set(u64),
    /// Refresh the elapsed time.
    Tick(Instant),
    SetPrompt(String),
    Println(String),
    Finish,
    Key(KeyEvent),
}

pub struct Progress {
    total: u64,
    current: u64,
    width: u16,
    full_char: char,
    empty_char: char,
    show_percentage: bool,
    show_cost: bool,
    started: Instant,
    elapsed: Duration,
    prompt: String,
    theme: Theme,
    status: Status,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL)
    }
}

impl Progress {
    /// A bar for `total` units. A zero total is raised to one.
    pub fn new(total: u64) -> Self {
        Self {
            total: total.max(1),
            current: 0,
            width: DEFAULT_WIDTH,
            full_char: FULL_CHAR,
            empty_char: EMPTY_CHAR,
            show_percentage: true,
            show_cost: true,
            started: Instant::now(),
            elapsed: Duration::ZERO,
            prompt: String::new(),
            theme: Theme::default(),
            status: Status::Active,
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn with_chars(mut self, full: char, empty: char) -> Self {
        self.full_char = full;
        self.empty_char = empty;
        self
    }

    pub fn with_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    pub fn with_cost(mut self, show: bool) -> Self {
        self.show_cost = show;
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

    /// Measure elapsed time from `started` instead of construction time.
    pub fn with_start(mut self, started: Instant) -> Self {
        self.started = started;
        self
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Percentage complete, 0.0 to 100.0.
    pub fn percent(&self) -> f64 {
        self.current as f64 * 100.0 / self.total as f64
    }

    /// Units per second since the start, 0 before any time has elapsed.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            0.0
        } else {
            self.current as f64 / secs
        }
    }

    /// The bar alone, exactly `width` glyphs.
    pub fn bar(&self) -> String {
        let (filled, empty) = bar_glyphs(self.width, self.current, self.total);
        let mut bar = String::with_capacity(filled + empty);
        bar.extend(std::iter::repeat(self.full_char).take(filled));
        bar.extend(std::iter::repeat(self.empty_char).take(empty));
        bar
    }

    fn cost_label(&self) -> String {
        format!(
            "{:.1}s · {:.1}/s",
            self.elapsed.as_secs_f64(),
            self.throughput()
        )
    }

    fn line(&self) -> Line<'static> {
        let (filled, empty) = bar_glyphs(self.width, self.current, self.total);
        let mut spans = Vec::new();
        if !self.prompt.is_empty() {
            spans.push(Span::styled(self.prompt.clone(), self.theme.prompt));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            self.full_char.to_string().repeat(filled),
            self.theme.progress_full,
        ));
        spans.push(Span::styled(
            self.empty_char.to_string().repeat(empty),
            self.theme.progress_empty,
        ));
        if self.show_percentage {
            spans.push(Span::raw(format!(" {:>3.0}%", self.percent())));
        }
        if self.show_cost {
            spans.push(Span::styled(
                format!(" {}", self.cost_label()),
                self.theme.placeholder,
            ));
        }
        Line::from(spans)
    }
}

impl Component for Progress {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if self.status.is_finished() {
            return Command::none();
        }
        match msg {
            Message::Incr(n) => self.current = self.current.saturating_add(n).min(self.total),
            Message::Set(n) => self.current = n.min(self.total),
            Message::Tick(now) => self.elapsed = now.saturating_duration_since(self.started),
            Message::SetPrompt(prompt) => self.prompt = prompt,
            Message::Println(line) => return Command::println(line),
            Message::Finish => {
                self.elapsed = self.started.elapsed();
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
        frame.render_widget(Paragraph::new(self.line()), area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.status.is_finished() || !self.show_cost {
            return vec![];
        }
        vec![subscribe(Every::new(COST_REFRESH, "progress-cost")).map(Message::Tick)]
    }
}

impl Prompt for Progress {
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
        (self.status == Status::Submitted).then(|| self.line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ctrl, render};

    #[test]
    fn bar_glyph_counts() {
        assert_eq!(bar_glyphs(10, 50, 100), (5, 5));
        assert_eq!(bar_glyphs(10, 0, 100), (0, 10));
        assert_eq!(bar_glyphs(10, 100, 100), (10, 0));
        assert_eq!(bar_glyphs(10, 33, 100), (3, 7));
        assert_eq!(bar_glyphs(10, 35, 100), (4, 6));
        assert_eq!(bar_glyphs(10, 500, 100), (10, 0));
    }

    #[test]
    fn bar_is_always_width_glyphs() {
        for current in 0..=7 {
            let p = Progress::new(7).with_width(13);
            let mut p = p;
            p.update(Message::Set(current));
            assert_eq!(p.bar().chars().count(), 13);
        }
    }

    #[test]
    fn half_way_bar() {
        let mut p = Progress::new(100).with_width(10);
        p.update(Message::Set(50));
        assert_eq!(p.bar(), "█████░░░░░");
        assert_eq!(p.percent(), 50.0);
    }

    #[test]
    fn incr_clamps_to_total() {
        let mut p = Progress::new(10);
        p.update(Message::Incr(4));
        p.update(Message::Incr(4));
        assert_eq!(p.current(), 8);
        p.update(Message::Incr(4));
        assert_eq!(p.current(), 10);
        p.update(Message::Set(99));
        assert_eq!(p.current(), 10);
    }

    #[test]
    fn zero_total_is_raised() {
        assert_eq!(Progress::new(0).total(), 1);
    }

    #[test]
    fn tick_updates_throughput() {
        let start = Instant::now();
        let mut p = Progress::new(100).with_start(start);
        assert_eq!(p.throughput(), 0.0);
        p.update(Message::Set(20));
        p.update(Message::Tick(start + Duration::from_secs(4)));
        assert_eq!(p.elapsed(), Duration::from_secs(4));
        assert_eq!(p.throughput(), 5.0);
    }

    #[test]
    fn finish_and_cancel() {
        let mut p = Progress::new(10);
        p.update(Message::Finish);
        assert_eq!(p.outcome(), Some(()));
        p.update(Message::Incr(3));
        assert_eq!(p.current(), 0);

        let mut p = Progress::new(10);
        p.update(Message::Key(ctrl('c')));
        assert_eq!(p.status(), Status::Cancelled);
        assert_eq!(p.outcome(), None);
    }

    #[test]
    fn cost_timer_only_when_shown() {
        assert_eq!(Progress::new(10).subscriptions().len(), 1);
        assert!(Progress::new(10).with_cost(false).subscriptions().is_empty());
    }

    #[test]
    fn renders_bar_and_percentage() {
        let mut p = Progress::new(4).with_width(4).with_cost(false);
        p.update(Message::Set(1));
        assert_eq!(render(&p, 10, 1), "█░░░  25% ");
    }
}
