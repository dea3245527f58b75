//! Text prompt with computed suggestions.

use crate::display::run_prompt;
use crate::error::{invalid, InfError};
use crate::text::TextOptions;
use infinite_core::OutputTarget;
use infinite_widgets::autocomplete::Autocomplete as AutocompleteWidget;
use infinite_widgets::selection::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteOptions {
    /// The text input. Its `output` is ignored in favor of the field below.
    pub input: TextOptions,
    /// Suggestions visible at once (default: 5, must be at least 1).
    pub page_size: usize,
    pub output: OutputTarget,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            input: TextOptions::default(),
            page_size: DEFAULT_PAGE_SIZE,
            output: OutputTarget::default(),
        }
    }
}

/// Ask for text while offering suggestions from `suggester`.
///
/// ```rust,ignore
/// let langs = ["rust", "ruby", "python"];
/// let answer = Autocomplete::new(AutocompleteOptions::default(), move |text: &str, _| {
///     langs.iter().filter(|l| l.starts_with(text)).map(|l| l.to_string()).collect()
/// })?
/// .display()
/// .await?;
/// ```
pub struct Autocomplete {
    widget: AutocompleteWidget,
    output: OutputTarget,
}

impl Autocomplete {
    pub fn new(
        options: AutocompleteOptions,
        suggester: impl Fn(&str, usize) -> Vec<String> + Send + 'static,
    ) -> Result<Self, InfError> {
        if options.page_size == 0 {
            return Err(invalid("page size must be at least 1"));
        }
        let input = options.input.build()?;
        let widget = AutocompleteWidget::new(suggester)
            .with_page_size(options.page_size)
            .with_theme(options.input.theme.clone())
            .with_input(input);
        Ok(Self {
            widget,
            output: options.output,
        })
    }

    /// Compute the new buffer and cursor when a suggestion is applied. The
    /// default replaces the whole buffer.
    pub fn with_completer(
        mut self,
        completer: impl Fn(&str, usize, &str) -> (String, usize) + Send + 'static,
    ) -> Self {
        self.widget = self.widget.with_completer(completer);
        self
    }

    /// `Ok(None)` if the user cancelled.
    pub async fn display(self) -> Result<Option<String>, InfError> {
        run_prompt(self.widget, self.output).await
    }
}
