//! Single and multi select prompts.

use crate::display::run_prompt;
use crate::error::{invalid, InfError};
use infinite_core::OutputTarget;
use infinite_widgets::selection::{Choice, RowRender, Selection, Symbols, DEFAULT_PAGE_SIZE};
use infinite_widgets::Theme;

/// Options shared by [`SingleSelect`] and [`MultiSelect`].
///
/// ```rust,ignore
/// let opts = SelectOptions {
///     prompt: "Pick a fruit:".into(),
///     page_size: 8,
///     ..SelectOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOptions {
    /// Header text (default: `Please select your options:`).
    pub prompt: String,
    /// Rows visible at once (default: 5, must be at least 1).
    pub page_size: usize,
    /// Typing filters the list (default: true).
    pub filter: bool,
    /// Show the key help line (default: true).
    pub show_help: bool,
    /// Cursor and hint symbols of the default row renderer.
    pub symbols: Symbols,
    pub theme: Theme,
    /// Where the prompt draws (default: stdout).
    pub output: OutputTarget,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            prompt: "Please select your options:".into(),
            page_size: DEFAULT_PAGE_SIZE,
            filter: true,
            show_help: true,
            symbols: Symbols::default(),
            theme: Theme::default(),
            output: OutputTarget::default(),
        }
    }
}

impl SelectOptions {
    fn build(&self, choices: Vec<String>, multi: bool) -> Result<Selection, InfError> {
        if choices.is_empty() {
            return Err(invalid("a selection needs at least one choice"));
        }
        if self.page_size == 0 {
            return Err(invalid("page size must be at least 1"));
        }
        Ok(Selection::new(choices)
            .with_multi(multi)
            .with_filter(self.filter)
            .with_page_size(self.page_size)
            .with_prompt(self.prompt.clone())
            .with_help(self.show_help)
            .with_theme(self.theme.clone())
            .with_symbols(self.symbols.clone()))
    }
}

fn collect<I, S>(choices: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    choices.into_iter().map(Into::into).collect()
}

/// Pick exactly one choice. Answers with its original index.
///
/// ```rust,ignore
/// let picked = SingleSelect::new(["red", "green"], SelectOptions::default())?
///     .display()
///     .await?;
/// ```
pub struct SingleSelect {
    selection: Selection,
    output: OutputTarget,
}

impl SingleSelect {
    pub fn new<I, S>(choices: I, options: SelectOptions) -> Result<Self, InfError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            selection: options.build(collect(choices), false)?,
            output: options.output,
        })
    }

    /// Draw rows with `render` instead of the default `> text` layout.
    pub fn with_row_render(mut self, render: impl RowRender + 'static) -> Self {
        self.selection = self.selection.with_row_render(render);
        self
    }

    /// Decide which choices match the filter text.
    pub fn with_filter_fn(mut self, f: impl Fn(&str, &Choice) -> bool + Send + 'static) -> Self {
        self.selection = self.selection.with_filter_fn(f);
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Run until the user confirms or cancels. `Ok(None)` on cancel.
    pub async fn display(self) -> Result<Option<usize>, InfError> {
        let answer = run_prompt(self.selection, self.output).await?;
        Ok(answer.and_then(|indices| indices.first().copied()))
    }
}

/// Pick any number of choices. Answers with their original indices, ascending.
pub struct MultiSelect {
    selection: Selection,
    output: OutputTarget,
}

impl MultiSelect {
    pub fn new<I, S>(choices: I, options: SelectOptions) -> Result<Self, InfError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            selection: options.build(collect(choices), true)?,
            output: options.output,
        })
    }

    pub fn with_row_render(mut self, render: impl RowRender + 'static) -> Self {
        self.selection = self.selection.with_row_render(render);
        self
    }

    pub fn with_filter_fn(mut self, f: impl Fn(&str, &Choice) -> bool + Send + 'static) -> Self {
        self.selection = self.selection.with_filter_fn(f);
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Run until the user confirms or cancels. An empty vec means the user
    /// confirmed without selecting anything.
    pub async fn display(self) -> Result<Option<Vec<usize>>, InfError> {
        run_prompt(self.selection, self.output).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infinite_widgets::Prompt;
    use ratatui::text::Line;

    const ITEMS: [&str; 3] = ["Buy carrots", "Buy celery", "Buy kohlrabi"];

    #[test]
    fn defaults() {
        let opts = SelectOptions::default();
        assert_eq!(opts.page_size, 5);
        assert!(opts.filter);
        assert_eq!(opts.output, OutputTarget::Stdout);
    }

    #[test]
    fn rejects_empty_choices() {
        let err = SingleSelect::new(Vec::<String>::new(), SelectOptions::default()).err();
        assert!(matches!(err, Some(InfError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_page_size() {
        let opts = SelectOptions {
            page_size: 0,
            ..SelectOptions::default()
        };
        assert!(matches!(
            MultiSelect::new(ITEMS, opts).err(),
            Some(InfError::InvalidConfig(_))
        ));
    }

    #[test]
    fn huge_page_size_does_not_overflow_height() {
        let opts = SelectOptions {
            page_size: 65535,
            ..SelectOptions::default()
        };
        let select = SingleSelect::new(ITEMS, opts).unwrap();
        assert_eq!(select.selection().height(), u16::MAX);
    }

    #[test]
    fn options_reach_the_widget() {
        let opts = SelectOptions {
            prompt: "Hello world".into(),
            page_size: 2,
            filter: false,
            ..SelectOptions::default()
        };
        let single = SingleSelect::new(ITEMS, opts.clone()).unwrap();
        assert!(!single.selection().is_multi());
        assert_eq!(single.selection().page().size(), 2);
        assert_eq!(single.selection().choices().len(), 3);

        let multi = MultiSelect::new(ITEMS, opts).unwrap();
        assert!(multi.selection().is_multi());
    }

    #[test]
    fn custom_row_render_is_kept() {
        let select = SingleSelect::new(ITEMS, SelectOptions::default())
            .unwrap()
            .with_row_render(|c: &Choice, _cursor: bool, _selected: bool| {
                Line::from(format!("#{} {}", c.index, c.text))
            });
        assert_eq!(select.selection().choices()[2].text, "Buy kohlrabi");
    }
}
