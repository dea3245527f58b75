//! Progress bar prompt driven by a background task.

use crate::display::program;
use crate::error::{invalid, InfError};
use crate::task::run_with_task;
use infinite_core::{OutputTarget, ProgramHandle};
use infinite_widgets::progress::{self, Progress as ProgressWidget, EMPTY_CHAR, FULL_CHAR};
use infinite_widgets::Theme;
use std::future::Future;

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressOptions {
    /// Units of work (default: 100, must be at least 1).
    pub total: u64,
    /// Bar width in cells (default: 40, must be at least 1).
    pub width: u16,
    /// Text before the bar.
    pub prompt: String,
    pub full_char: char,
    pub empty_char: char,
    /// Show the percentage after the bar (default: true).
    pub show_percentage: bool,
    /// Show elapsed time and throughput (default: true).
    pub show_cost: bool,
    pub theme: Theme,
    pub output: OutputTarget,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            total: progress::DEFAULT_TOTAL,
            width: progress::DEFAULT_WIDTH,
            prompt: String::new(),
            full_char: FULL_CHAR,
            empty_char: EMPTY_CHAR,
            show_percentage: true,
            show_cost: true,
            theme: Theme::default(),
            output: OutputTarget::default(),
        }
    }
}

impl ProgressOptions {
    fn build(&self) -> Result<ProgressWidget, InfError> {
        if self.total == 0 {
            return Err(invalid("progress total must be at least 1"));
        }
        if self.width == 0 {
            return Err(invalid("progress width must be at least 1"));
        }
        Ok(ProgressWidget::new(self.total)
            .with_width(self.width)
            .with_prompt(self.prompt.clone())
            .with_chars(self.full_char, self.empty_char)
            .with_percentage(self.show_percentage)
            .with_cost(self.show_cost)
            .with_theme(self.theme.clone()))
    }
}

/// Reports progress from the background task.
#[derive(Clone)]
pub struct ProgressHandle {
    inner: ProgramHandle<progress::Message>,
}

impl ProgressHandle {
    /// Add `n` units, clamped to the total.
    pub fn incr(&self, n: u64) {
        self.inner.send(progress::Message::Incr(n));
    }

    /// Set the current value, clamped to the total.
    pub fn set(&self, current: u64) {
        self.inner.send(progress::Message::Set(current));
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        self.inner.send(progress::Message::SetPrompt(prompt.into()));
    }

    /// Print a line above the bar.
    pub fn println(&self, line: impl Into<String>) {
        self.inner.send(progress::Message::Println(line.into()));
    }
}

/// Show a progress bar until a task completes.
///
/// Reaching the total does not finish the bar; the task returning does.
///
/// ```rust,ignore
/// Progress::new(ProgressOptions { total: files.len() as u64, ..Default::default() })?
///     .display(|bar| async move {
///         for file in files {
///             copy(file).await;
///             bar.incr(1);
///         }
///     })
///     .await?;
/// ```
pub struct Progress {
    widget: ProgressWidget,
    output: OutputTarget,
}

impl Progress {
    pub fn new(options: ProgressOptions) -> Result<Self, InfError> {
        Ok(Self {
            widget: options.build()?,
            output: options.output,
        })
    }

    /// Run `task` while the bar is shown. `Ok(None)` if the user cancelled,
    /// in which case the task is aborted.
    pub async fn display<F, Fut, T>(self, task: F) -> Result<Option<T>, InfError>
    where
        F: FnOnce(ProgressHandle) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let program = program(self.widget.with_start(std::time::Instant::now()), self.output)?;
        let handle = ProgressHandle {
            inner: program.handle(),
        };
        let done = handle.inner.clone();
        run_with_task(program.run(), task(handle), move || {
            done.send(progress::Message::Finish)
        })
        .await
    }
}
