//! Filterable, paged, single or multi select list.
//!
//! [`Selection`] owns an ordered list of [`Choice`]s, the subsequence
//! currently matching the filter text, a cursor into that subsequence and the
//! set of selected choices. The selected set is keyed by original index and
//! is never touched by filtering, so hiding a selected row keeps it selected.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Up, Ctrl+P | cursor up (wraps) |
//! | Down, Ctrl+N | cursor down (wraps) |
//! | PageUp / PageDown | move one page |
//! | Tab | toggle the row (multi) |
//! | Ctrl+A | toggle every filtered row (multi) |
//! | Enter | confirm |
//! | Esc, Ctrl+C | cancel |
//!
//! Every other key edits the filter text. With filtering disabled, `k`/`j`
//! also move and Space also toggles.

use crate::help;
use crate::input::{self, CursorMode, Input};
use crate::key::{Binding, KeyCombination, KeyMap};
use crate::page::PageWindow;
use crate::prompt::{Prompt, Status};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use infinite_core::{Command, Component, Subscription, TerminalEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::collections::BTreeSet;
use unicode_width::UnicodeWidthStr;

/// Rows shown at once unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One selectable item: its position in the original list and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub index: usize,
    pub text: String,
}

impl Choice {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Decides whether a choice matches the filter text.
pub type FilterFn = Box<dyn Fn(&str, &Choice) -> bool + Send>;

/// Case-insensitive substring match on the choice text.
pub fn default_filter(filter: &str, choice: &Choice) -> bool {
    choice.text.to_lowercase().contains(&filter.to_lowercase())
}

/// Produces one styled row.
pub trait RowRender: Send {
    fn render(&self, choice: &Choice, is_cursor: bool, is_selected: bool) -> Line<'static>;
}

impl<F> RowRender for F
where
    F: Fn(&Choice, bool, bool) -> Line<'static> + Send,
{
    fn render(&self, choice: &Choice, is_cursor: bool, is_selected: bool) -> Line<'static> {
        self(choice, is_cursor, is_selected)
    }
}

/// Symbols drawn by [`DefaultRowRender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub cursor: String,
    pub uncursor: String,
    pub hint: String,
    pub unhint: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            cursor: ">".into(),
            uncursor: " ".into(),
            hint: "✓".into(),
            unhint: "✗".into(),
        }
    }
}

/// `> ✓ text`: cursor symbol, hint symbol in multi-select, then the text.
#[derive(Debug, Clone)]
pub struct DefaultRowRender {
    pub symbols: Symbols,
    pub show_hints: bool,
    pub theme: Theme,
}

impl RowRender for DefaultRowRender {
    fn render(&self, choice: &Choice, is_cursor: bool, is_selected: bool) -> Line<'static> {
        let mut spans = Vec::with_capacity(5);
        if is_cursor {
            spans.push(Span::styled(self.symbols.cursor.clone(), self.theme.cursor_symbol));
        } else {
            spans.push(Span::raw(self.symbols.uncursor.clone()));
        }
        spans.push(Span::raw(" "));
        if self.show_hints {
            if is_selected {
                spans.push(Span::styled(self.symbols.hint.clone(), self.theme.hint_symbol));
            } else {
                spans.push(Span::styled(self.symbols.unhint.clone(), self.theme.unhint_symbol));
            }
            spans.push(Span::raw(" "));
        }
        let style = if is_cursor {
            self.theme.choice_text
        } else {
            self.theme.unchoice_text
        };
        spans.push(Span::styled(choice.text.clone(), style));
        Line::from(spans)
    }
}

/// Key bindings for [`Selection`].
#[derive(Debug, Clone)]
pub struct SelectionKeyMap {
    pub up: Binding,
    pub down: Binding,
    pub page_up: Binding,
    pub page_down: Binding,
    pub toggle: Binding,
    pub toggle_all: Binding,
    pub confirm: Binding,
    pub cancel: Binding,
}

impl SelectionKeyMap {
    /// Bindings for the given mode. Letter keys only navigate when they are
    /// not needed for typing a filter.
    pub fn new(multi: bool, filter: bool) -> Self {
        let mut up = Binding::new(KeyCombination::new(KeyCode::Up), "up")
            .or(KeyCombination::ctrl(KeyCode::Char('p')));
        let mut down = Binding::new(KeyCombination::new(KeyCode::Down), "down")
            .or(KeyCombination::ctrl(KeyCode::Char('n')));
        let mut toggle = Binding::new(KeyCombination::new(KeyCode::Tab), "toggle").enabled(multi);
        if !filter {
            up = up.or(KeyCombination::new(KeyCode::Char('k')));
            down = down.or(KeyCombination::new(KeyCode::Char('j')));
            toggle = toggle.or(KeyCombination::new(KeyCode::Char(' ')));
        }
        Self {
            up,
            down,
            page_up: Binding::new(KeyCombination::new(KeyCode::PageUp), "page up"),
            page_down: Binding::new(KeyCombination::new(KeyCode::PageDown), "page down"),
            toggle,
            toggle_all: Binding::new(KeyCombination::ctrl(KeyCode::Char('a')), "all")
                .enabled(multi),
            confirm: Binding::new(KeyCombination::new(KeyCode::Enter), "confirm"),
            cancel: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Esc),
                    KeyCombination::ctrl(KeyCode::Char('c')),
                ],
                "cancel",
            ),
        }
    }
}

impl KeyMap for SelectionKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.up,
            &self.down,
            &self.toggle,
            &self.toggle_all,
            &self.confirm,
            &self.cancel,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Key(KeyEvent),
    Paste(String),
    /// Cursor blink of the filter input.
    Blink,
    /// Terminal resized; only the page window is recomputed.
    Resize(u16, u16),
}

pub struct Selection {
    choices: Vec<Choice>,
    filtered: Vec<usize>,
    page: PageWindow,
    selected: BTreeSet<usize>,
    multi: bool,
    filter_enabled: bool,
    filter_input: Input,
    filter_fn: FilterFn,
    row_render: Box<dyn RowRender>,
    symbols: Symbols,
    custom_render: bool,
    custom_keymap: bool,
    prompt: String,
    show_prompt: bool,
    show_help: bool,
    keymap: SelectionKeyMap,
    theme: Theme,
    status: Status,
    answer: Option<Vec<usize>>,
}

impl Selection {
    /// A single-select list over `labels` with filtering on and the default
    /// page size.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<Choice> = labels
            .into_iter()
            .enumerate()
            .map(|(index, text)| Choice::new(index, text))
            .collect();
        let filtered = (0..choices.len()).collect::<Vec<_>>();
        let theme = Theme::default();
        Self {
            page: PageWindow::new(filtered.len(), DEFAULT_PAGE_SIZE),
            choices,
            filtered,
            selected: BTreeSet::new(),
            multi: false,
            filter_enabled: true,
            filter_input: filter_input(&theme),
            filter_fn: Box::new(default_filter),
            row_render: Box::new(DefaultRowRender {
                symbols: Symbols::default(),
                show_hints: false,
                theme: theme.clone(),
            }),
            symbols: Symbols::default(),
            custom_render: false,
            custom_keymap: false,
            prompt: String::new(),
            show_prompt: true,
            show_help: true,
            keymap: SelectionKeyMap::new(false, true),
            theme,
            status: Status::Active,
            answer: None,
        }
    }

    /// Enable toggling rows. The answer becomes the selected set.
    pub fn with_multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self.refresh_keymap();
        self.refresh_default_render();
        self
    }

    pub fn with_filter(mut self, enabled: bool) -> Self {
        self.filter_enabled = enabled;
        self.refresh_keymap();
        self
    }

    pub fn with_filter_fn(mut self, f: impl Fn(&str, &Choice) -> bool + Send + 'static) -> Self {
        self.filter_fn = Box::new(f);
        self.refilter();
        self
    }

    /// Rows shown at once. Values below one are raised to one.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page.set_size(size.max(1));
        self
    }

    /// Replace the default row renderer.
    pub fn with_row_render(mut self, render: impl RowRender + 'static) -> Self {
        self.row_render = Box::new(render);
        self.custom_render = true;
        self
    }

    /// Symbols for the default renderer.
    pub fn with_symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self.refresh_default_render();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Draw the prompt and filter row above the list.
    pub fn with_header(mut self, show: bool) -> Self {
        self.show_prompt = show;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Apply `theme` to the list, the filter input and the default renderer.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.filter_input = filter_input(&theme).with_value(&self.filter_input.value());
        self.theme = theme;
        self.refresh_default_render();
        self
    }

    /// Replace the bindings. Later `with_multi` or `with_filter` calls keep them.
    pub fn with_keymap(mut self, keymap: SelectionKeyMap) -> Self {
        self.keymap = keymap;
        self.custom_keymap = true;
        self
    }

    fn refresh_keymap(&mut self) {
        if !self.custom_keymap {
            self.keymap = SelectionKeyMap::new(self.multi, self.filter_enabled);
        }
    }

    fn refresh_default_render(&mut self) {
        if self.custom_render {
            return;
        }
        self.row_render = Box::new(DefaultRowRender {
            symbols: self.symbols.clone(),
            show_hints: self.multi,
            theme: self.theme.clone(),
        });
    }

    /// Replace every choice. The selection, filter results and cursor start over.
    pub fn set_choices<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = labels
            .into_iter()
            .enumerate()
            .map(|(index, text)| Choice::new(index, text))
            .collect();
        self.selected.clear();
        self.refilter();
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Choices matching the filter, in original order.
    pub fn filtered(&self) -> impl Iterator<Item = &Choice> {
        self.filtered.iter().map(|&i| &self.choices[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Index into the filtered list.
    pub fn cursor(&self) -> usize {
        self.page.cursor()
    }

    /// The choice under the cursor, if any row matches.
    pub fn current(&self) -> Option<&Choice> {
        self.filtered
            .get(self.page.cursor())
            .map(|&i| &self.choices[i])
    }

    /// Original indices of the selected choices, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn filter_text(&self) -> String {
        self.filter_input.value()
    }

    pub fn page(&self) -> &PageWindow {
        &self.page
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn keymap(&self) -> &SelectionKeyMap {
        &self.keymap
    }

    /// Rows needed by [`view`](Component::view): header, page and help line.
    pub fn rows(&self) -> u16 {
        u16::try_from(self.page.size())
            .unwrap_or(u16::MAX)
            .saturating_add(u16::from(self.show_prompt))
            .saturating_add(u16::from(self.show_help))
    }

    pub fn move_up(&mut self) {
        if self.is_active() {
            self.page.move_up();
        }
    }

    pub fn move_down(&mut self) {
        if self.is_active() {
            self.page.move_down();
        }
    }

    pub fn page_up(&mut self) {
        if self.is_active() {
            self.page.page_up();
        }
    }

    pub fn page_down(&mut self) {
        if self.is_active() {
            self.page.page_down();
        }
    }

    /// Flip the row under the cursor. No-op in single-select.
    pub fn toggle(&mut self) {
        if !self.is_active() || !self.multi {
            return;
        }
        if let Some(index) = self.current().map(|c| c.index) {
            if !self.selected.remove(&index) {
                self.selected.insert(index);
            }
        }
    }

    /// Select every filtered row, or clear them all if they already are.
    pub fn toggle_all(&mut self) {
        if !self.is_active() || !self.multi || self.filtered.is_empty() {
            return;
        }
        let all_selected = self
            .filtered
            .iter()
            .all(|&i| self.selected.contains(&self.choices[i].index));
        for &i in &self.filtered {
            let index = self.choices[i].index;
            if all_selected {
                self.selected.remove(&index);
            } else {
                self.selected.insert(index);
            }
        }
    }

    /// Finish with the current answer. No-op while nothing matches the filter.
    pub fn confirm(&mut self) {
        if !self.is_active() {
            return;
        }
        let Some(current) = self.current().map(|c| c.index) else {
            return;
        };
        let answer = if self.multi {
            self.selected.iter().copied().collect()
        } else {
            vec![current]
        };
        self.answer = Some(answer);
        self.status = Status::Submitted;
    }

    pub fn cancel(&mut self) {
        if self.is_active() {
            self.status = Status::Cancelled;
        }
    }

    /// Replace the filter text and recompute the filtered rows.
    pub fn set_filter(&mut self, text: &str) {
        if !self.is_active() || !self.filter_enabled {
            return;
        }
        self.filter_input.set_value(text);
        self.refilter();
    }

    fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    fn refilter(&mut self) {
        let text = self.filter_input.value();
        let filter = &self.filter_fn;
        self.filtered = self
            .choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| text.is_empty() || filter(&text, *choice))
            .map(|(i, _)| i)
            .collect();
        self.page.set_count(self.filtered.len());
        self.page.reset();
    }

    fn edit_filter(&mut self, msg: input::Message) {
        if !self.filter_enabled {
            return;
        }
        let before = self.filter_input.value();
        let _ = self.filter_input.update(msg);
        if self.filter_input.value() != before {
            self.refilter();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let keys = &self.keymap;
        if keys.cancel.matches(&key) {
            self.cancel();
        } else if keys.confirm.matches(&key) {
            self.confirm();
        } else if keys.toggle_all.matches(&key) {
            self.toggle_all();
        } else if keys.toggle.matches(&key) {
            self.toggle();
        } else if keys.up.matches(&key) {
            self.move_up();
        } else if keys.down.matches(&key) {
            self.move_down();
        } else if keys.page_up.matches(&key) {
            self.page_up();
        } else if keys.page_down.matches(&key) {
            self.page_down();
        } else {
            self.edit_filter(input::Message::Key(key));
        }
    }

    /// Draw only the visible rows into `area`.
    pub fn render_rows(&self, frame: &mut Frame, area: Rect) {
        let cursor = self.page.cursor();
        let lines: Vec<Line<'static>> = self
            .page
            .visible()
            .map(|row| {
                let choice = &self.choices[self.filtered[row]];
                self.row_render
                    .render(choice, row == cursor, self.selected.contains(&choice.index))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let prompt_width = (self.prompt.width() as u16).min(area.width);
        frame.render_widget(
            Paragraph::new(Span::styled(self.prompt.clone(), self.theme.prompt)),
            Rect::new(area.x, area.y, prompt_width, 1),
        );
        if self.filter_enabled && prompt_width + 1 < area.width {
            let input_area = Rect::new(
                area.x + prompt_width + 1,
                area.y,
                area.width - prompt_width - 1,
                1,
            );
            self.filter_input.view(frame, input_area);
        }
    }
}

fn filter_input(theme: &Theme) -> Input {
    Input::new()
        .with_cursor_mode(CursorMode::Blink)
        .with_theme(theme.clone())
}

impl Component for Selection {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if !self.is_active() {
            return Command::none();
        }
        match msg {
            Message::Key(key) => self.handle_key(key),
            Message::Paste(text) => self.edit_filter(input::Message::Paste(text)),
            Message::Blink => {
                let _ = self.filter_input.update(input::Message::Blink);
            }
            Message::Resize(..) => {
                let count = self.filtered.len();
                self.page.set_count(count);
            }
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let mut y = area.y;
        let bottom = area.bottom();
        if self.show_prompt {
            self.render_header(frame, Rect::new(area.x, y, area.width, 1));
            y += 1;
        }
        let rows = (self.page.size() as u16).min(bottom.saturating_sub(y));
        self.render_rows(frame, Rect::new(area.x, y, area.width, rows));
        y += rows;
        if self.show_help && y < bottom {
            frame.render_widget(
                Paragraph::new(help::short_help_line(&self.keymap, &self.theme)),
                Rect::new(area.x, y, area.width, 1),
            );
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.is_active() && self.filter_enabled && self.show_prompt {
            self.filter_input
                .subscriptions()
                .into_iter()
                .map(|sub| sub.map(|_| Message::Blink))
                .collect()
        } else {
            vec![]
        }
    }
}

impl Prompt for Selection {
    type Output = Vec<usize>;

    fn map_event(event: TerminalEvent) -> Option<Message> {
        Some(match event {
            TerminalEvent::Key(key) => Message::Key(key),
            TerminalEvent::Paste(text) => Message::Paste(text),
            TerminalEvent::Resize(w, h) => Message::Resize(w, h),
        })
    }

    fn status(&self) -> Status {
        self.status
    }

    fn outcome(&mut self) -> Option<Vec<usize>> {
        self.answer.take()
    }

    fn height(&self) -> u16 {
        self.rows()
    }

    fn summary(&self) -> Option<Line<'static>> {
        let answer = self.answer.as_ref()?;
        let texts: Vec<&str> = answer
            .iter()
            .filter_map(|&i| self.choices.get(i))
            .map(|c| c.text.as_str())
            .collect();
        Some(Line::from(vec![
            Span::styled(self.prompt.clone(), self.theme.prompt),
            Span::raw(" "),
            Span::styled(texts.join(", "), self.theme.answer),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ctrl, key, render};

    fn fruits() -> Selection {
        Selection::new(["apple", "banana", "cherry", "date", "elderberry", "fig", "grape"])
    }

    fn press(sel: &mut Selection, code: KeyCode) {
        sel.update(Message::Key(key(code)));
    }

    fn type_filter(sel: &mut Selection, text: &str) {
        for c in text.chars() {
            press(sel, KeyCode::Char(c));
        }
    }

    fn filtered_texts(sel: &Selection) -> Vec<String> {
        sel.filtered().map(|c| c.text.clone()).collect()
    }

    #[test]
    fn construction_defaults() {
        let sel = fruits();
        assert_eq!(sel.choices().len(), 7);
        assert_eq!(sel.choices()[3], Choice::new(3, "date"));
        assert_eq!(sel.cursor(), 0);
        assert_eq!(sel.filtered_len(), 7);
        assert_eq!(sel.page().size(), DEFAULT_PAGE_SIZE);
        assert_eq!(sel.selected().count(), 0);
        assert_eq!(sel.status(), Status::Active);
    }

    #[test]
    fn seven_downs_wrap_back_to_start() {
        let mut sel = fruits();
        for _ in 0..7 {
            press(&mut sel, KeyCode::Down);
            assert!(sel.cursor() < 7);
        }
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn up_from_top_wraps_to_bottom() {
        let mut sel = fruits();
        press(&mut sel, KeyCode::Up);
        assert_eq!(sel.cursor(), 6);
        assert_eq!(sel.page().visible(), 2..7);
    }

    #[test]
    fn ctrl_n_and_ctrl_p_move() {
        let mut sel = fruits();
        sel.update(Message::Key(ctrl('n')));
        sel.update(Message::Key(ctrl('n')));
        sel.update(Message::Key(ctrl('p')));
        assert_eq!(sel.cursor(), 1);
    }

    #[test]
    fn filter_preserves_original_order() {
        let mut sel = Selection::new(["a", "ab", "b", "abc"]);
        type_filter(&mut sel, "a");
        assert_eq!(filtered_texts(&sel), ["a", "ab", "abc"]);
        let indices: Vec<usize> = sel.filtered().map(|c| c.index).collect();
        assert_eq!(indices, [0, 1, 3]);
    }

    #[test]
    fn filter_is_case_insensitive_and_resets_cursor() {
        let mut sel = fruits();
        press(&mut sel, KeyCode::Down);
        press(&mut sel, KeyCode::Down);
        type_filter(&mut sel, "ER");
        assert_eq!(filtered_texts(&sel), ["cherry", "elderberry"]);
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn backspace_widens_filter() {
        let mut sel = fruits();
        type_filter(&mut sel, "gr");
        assert_eq!(sel.filtered_len(), 1);
        press(&mut sel, KeyCode::Backspace);
        press(&mut sel, KeyCode::Backspace);
        assert_eq!(sel.filtered_len(), 7);
        assert_eq!(sel.filter_text(), "");
    }

    #[test]
    fn custom_filter_fn() {
        let mut sel = fruits().with_filter_fn(|text, choice| choice.text.starts_with(text));
        type_filter(&mut sel, "e");
        assert_eq!(filtered_texts(&sel), ["elderberry"]);
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut sel = fruits().with_multi(true);
        press(&mut sel, KeyCode::Down);
        press(&mut sel, KeyCode::Tab);
        assert!(sel.is_selected(1));
        press(&mut sel, KeyCode::Tab);
        assert!(!sel.is_selected(1));
        assert_eq!(sel.selected().count(), 0);
    }

    #[test]
    fn filtering_never_drops_selection() {
        let mut sel = fruits().with_multi(true);
        press(&mut sel, KeyCode::Tab);
        type_filter(&mut sel, "fig");
        assert_eq!(filtered_texts(&sel), ["fig"]);
        assert!(sel.is_selected(0));
        press(&mut sel, KeyCode::Tab);
        press(&mut sel, KeyCode::Enter);
        assert_eq!(sel.outcome(), Some(vec![0, 5]));
    }

    #[test]
    fn toggle_is_noop_in_single_select() {
        let mut sel = fruits();
        sel.toggle();
        press(&mut sel, KeyCode::Tab);
        assert_eq!(sel.selected().count(), 0);
        assert_eq!(sel.filter_text(), "");
    }

    #[test]
    fn toggle_all_selects_then_clears_filtered_rows() {
        let mut sel = fruits().with_multi(true);
        type_filter(&mut sel, "an");
        sel.update(Message::Key(ctrl('a')));
        assert_eq!(sel.selected().collect::<Vec<_>>(), [1]);
        sel.set_filter("");
        sel.update(Message::Key(ctrl('a')));
        assert_eq!(sel.selected().count(), 7);
        sel.update(Message::Key(ctrl('a')));
        assert_eq!(sel.selected().count(), 0);
    }

    #[test]
    fn confirm_single_returns_original_index() {
        let mut sel = fruits();
        type_filter(&mut sel, "rape");
        press(&mut sel, KeyCode::Enter);
        assert_eq!(sel.status(), Status::Submitted);
        assert_eq!(sel.outcome(), Some(vec![6]));
    }

    #[test]
    fn confirm_multi_returns_sorted_set() {
        let mut sel = fruits().with_multi(true);
        press(&mut sel, KeyCode::Up);
        press(&mut sel, KeyCode::Tab);
        press(&mut sel, KeyCode::Down);
        press(&mut sel, KeyCode::Down);
        press(&mut sel, KeyCode::Tab);
        press(&mut sel, KeyCode::Enter);
        assert_eq!(sel.outcome(), Some(vec![1, 6]));
    }

    #[test]
    fn confirm_on_empty_filter_is_ignored() {
        let mut sel = fruits();
        type_filter(&mut sel, "zzz");
        assert_eq!(sel.filtered_len(), 0);
        press(&mut sel, KeyCode::Enter);
        assert_eq!(sel.status(), Status::Active);
        assert_eq!(sel.filter_text(), "zzz");
        assert_eq!(sel.outcome(), None);
    }

    #[test]
    fn cancel_freezes_state() {
        let mut sel = fruits().with_multi(true);
        press(&mut sel, KeyCode::Esc);
        assert_eq!(sel.status(), Status::Cancelled);
        press(&mut sel, KeyCode::Down);
        press(&mut sel, KeyCode::Tab);
        type_filter(&mut sel, "a");
        press(&mut sel, KeyCode::Enter);
        assert_eq!(sel.cursor(), 0);
        assert_eq!(sel.selected().count(), 0);
        assert_eq!(sel.filter_text(), "");
        assert_eq!(sel.outcome(), None);
    }

    #[test]
    fn ctrl_c_cancels() {
        let mut sel = fruits();
        sel.update(Message::Key(ctrl('c')));
        assert!(sel.is_finished());
    }

    #[test]
    fn letter_keys_navigate_without_filter() {
        let mut sel = fruits().with_filter(false).with_multi(true);
        press(&mut sel, KeyCode::Char('j'));
        press(&mut sel, KeyCode::Char('j'));
        press(&mut sel, KeyCode::Char('k'));
        assert_eq!(sel.cursor(), 1);
        press(&mut sel, KeyCode::Char(' '));
        assert!(sel.is_selected(1));
        press(&mut sel, KeyCode::Char('x'));
        assert_eq!(sel.filter_text(), "");
    }

    #[test]
    fn page_keys_move_by_page() {
        let mut sel = fruits();
        press(&mut sel, KeyCode::PageDown);
        assert_eq!(sel.cursor(), 5);
        press(&mut sel, KeyCode::PageDown);
        assert_eq!(sel.cursor(), 6);
        press(&mut sel, KeyCode::PageUp);
        assert_eq!(sel.cursor(), 1);
    }

    #[test]
    fn resize_keeps_cursor_visible() {
        let mut sel = fruits();
        press(&mut sel, KeyCode::Up);
        sel.update(Message::Resize(80, 24));
        assert_eq!(sel.cursor(), 6);
        assert!(sel.page().visible().contains(&6));
    }

    #[test]
    fn set_choices_starts_over() {
        let mut sel = fruits().with_multi(true);
        press(&mut sel, KeyCode::Tab);
        press(&mut sel, KeyCode::Down);
        sel.set_choices(["x", "y"]);
        assert_eq!(sel.filtered_len(), 2);
        assert_eq!(sel.cursor(), 0);
        assert_eq!(sel.selected().count(), 0);
    }

    #[test]
    fn height_counts_header_page_and_help() {
        assert_eq!(fruits().height(), 7);
        assert_eq!(fruits().with_help(false).with_header(false).height(), 5);
        assert_eq!(fruits().with_page_size(3).height(), 5);
    }

    #[test]
    fn huge_page_size_saturates_height() {
        assert_eq!(fruits().with_page_size(65535).height(), u16::MAX);
        assert_eq!(fruits().with_page_size(usize::MAX).height(), u16::MAX);
        let bare = fruits().with_header(false).with_help(false);
        assert_eq!(bare.with_page_size(70_000).height(), u16::MAX);
    }

    #[test]
    fn custom_keymap_survives_mode_changes() {
        let mut keys = SelectionKeyMap::new(false, true);
        keys.confirm = Binding::new(KeyCombination::new(KeyCode::Char(' ')), "pick");
        let mut sel = fruits().with_keymap(keys).with_multi(true).with_filter(false);
        assert_eq!(sel.keymap().confirm.keys_label(), "space");
        press(&mut sel, KeyCode::Char(' '));
        assert_eq!(sel.status(), Status::Submitted);
    }

    #[test]
    fn renders_visible_page_with_cursor_symbol() {
        let sel = fruits().with_prompt("Pick:").with_help(false).with_filter(false);
        let out = render(&sel, 20, 6);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim_end(), "Pick:");
        assert_eq!(lines[1].trim_end(), "> apple");
        assert_eq!(lines[2].trim_end(), "  banana");
        assert_eq!(lines[5].trim_end(), "  elderberry");
    }

    #[test]
    fn renders_hint_symbols_in_multi_select() {
        let mut sel = fruits().with_multi(true).with_header(false).with_help(false);
        press(&mut sel, KeyCode::Tab);
        let out = render(&sel, 20, 5);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim_end(), "> ✓ apple");
        assert_eq!(lines[1].trim_end(), "  ✗ banana");
    }

    #[test]
    fn custom_row_render_is_used() {
        let sel = Selection::new(["one", "two"])
            .with_header(false)
            .with_help(false)
            .with_row_render(|choice: &Choice, is_cursor: bool, _selected: bool| {
                Line::from(format!("{}{}", if is_cursor { "*" } else { "-" }, choice.text))
            });
        let out = render(&sel, 10, 5);
        assert!(out.starts_with("*one"));
        assert!(out.lines().nth(1).is_some_and(|l| l.starts_with("-two")));
    }

    #[test]
    fn help_line_lists_enabled_bindings() {
        let sel = fruits().with_header(false).with_page_size(1);
        let out = render(&sel, 80, 2);
        let help = out.lines().nth(1).map(str::trim_end).unwrap_or_default();
        assert!(help.starts_with("↑/ctrl+p up • ↓/ctrl+n down • enter confirm"));
        assert!(!help.contains("toggle"));
    }

    #[test]
    fn summary_names_the_answer() {
        let mut sel = fruits().with_prompt("Fruit?");
        press(&mut sel, KeyCode::Down);
        press(&mut sel, KeyCode::Enter);
        let summary = sel.summary().map(|l| l.to_string());
        assert_eq!(summary.as_deref(), Some("Fruit? banana"));
    }
}
