//! Spinner prompt that runs while a background task works.

use crate::display::program;
use crate::error::{invalid, InfError};
use crate::task::run_with_task;
use infinite_core::{OutputTarget, ProgramHandle};
use infinite_widgets::spinner::{self, Shape, Spinner as SpinnerWidget};
use infinite_widgets::Theme;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerOptions {
    /// Text next to the spinner (default: `Loading...`).
    pub prompt: String,
    pub shape: Shape,
    /// Custom frames, overriding `shape` when set.
    pub frames: Option<&'static [&'static str]>,
    /// Time per frame. Defaults to the shape's own interval.
    pub interval: Option<Duration>,
    pub theme: Theme,
    pub output: OutputTarget,
}

impl Default for SpinnerOptions {
    fn default() -> Self {
        Self {
            prompt: "Loading...".into(),
            shape: Shape::default(),
            frames: None,
            interval: None,
            theme: Theme::default(),
            output: OutputTarget::default(),
        }
    }
}

impl SpinnerOptions {
    fn build(&self) -> Result<SpinnerWidget, InfError> {
        let mut widget = SpinnerWidget::with_shape(self.shape)
            .with_prompt(self.prompt.clone())
            .with_theme(self.theme.clone());
        if let Some(frames) = self.frames {
            if frames.is_empty() {
                return Err(invalid("spinner frames must not be empty"));
            }
            widget = widget.with_frames(frames);
        }
        if let Some(interval) = self.interval {
            if interval.is_zero() {
                return Err(invalid("spinner interval must be positive"));
            }
            widget = widget.with_interval(interval);
        }
        Ok(widget)
    }
}

/// Talks to a running spinner from its background task.
#[derive(Clone)]
pub struct SpinnerHandle {
    inner: ProgramHandle<spinner::Message>,
}

impl SpinnerHandle {
    /// Replace the text next to the spinner.
    pub fn set_prompt(&self, prompt: impl Into<String>) {
        self.inner.send(spinner::Message::SetPrompt(prompt.into()));
    }

    /// Print a line above the spinner. It stays in the scrollback.
    pub fn println(&self, line: impl Into<String>) {
        self.inner.send(spinner::Message::Println(line.into()));
    }

    /// Stop spinning now and leave `message` behind. The task keeps running
    /// and `display` still waits for it.
    pub fn finish(&self, message: impl Into<String>) {
        self.inner.send(spinner::Message::Finish(Some(message.into())));
    }
}

/// Show a spinner until a task completes.
///
/// ```rust,ignore
/// let bytes = Spinner::new(SpinnerOptions::default())?
///     .display(|handle| async move {
///         handle.set_prompt("Downloading...");
///         download().await
///     })
///     .await?;
/// ```
pub struct Spinner {
    widget: SpinnerWidget,
    output: OutputTarget,
}

impl Spinner {
    pub fn new(options: SpinnerOptions) -> Result<Self, InfError> {
        Ok(Self {
            widget: options.build()?,
            output: options.output,
        })
    }

    /// Run `task` on the tokio runtime while the spinner animates.
    ///
    /// Returns the task's output once it completes, or `Ok(None)` if the
    /// user cancelled, in which case the task is aborted.
    pub async fn display<F, Fut, T>(self, task: F) -> Result<Option<T>, InfError>
    where
        F: FnOnce(SpinnerHandle) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let program = program(self.widget, self.output)?;
        let handle = SpinnerHandle {
            inner: program.handle(),
        };
        let done = handle.inner.clone();
        run_with_task(program.run(), task(handle), move || {
            done.send(spinner::Message::Finish(None))
        })
        .await
    }
}
