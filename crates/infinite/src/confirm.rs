//! Yes/no prompt.

use crate::display::run_prompt;
use crate::error::InfError;
use infinite_core::OutputTarget;
use infinite_widgets::confirm::Confirm as ConfirmWidget;
use infinite_widgets::Theme;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmOptions {
    /// The question (default: `Are you sure?`).
    pub prompt: String,
    /// Answer taken by Enter (default: false).
    pub default: bool,
    pub theme: Theme,
    pub output: OutputTarget,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            prompt: "Are you sure?".into(),
            default: false,
            theme: Theme::default(),
            output: OutputTarget::default(),
        }
    }
}

/// Ask a yes/no question.
pub struct Confirm {
    widget: ConfirmWidget,
    output: OutputTarget,
}

impl Confirm {
    pub fn new(options: ConfirmOptions) -> Self {
        let widget = ConfirmWidget::new(options.prompt)
            .with_default(options.default)
            .with_theme(options.theme);
        Self {
            widget,
            output: options.output,
        }
    }

    /// `Ok(None)` if the user cancelled.
    pub async fn display(self) -> Result<Option<bool>, InfError> {
        run_prompt(self.widget, self.output).await
    }
}
