//! Single-line text prompt.

use crate::display::run_prompt;
use crate::error::{invalid, InfError};
use infinite_core::OutputTarget;
use infinite_widgets::input::{CursorMode, EchoMode, Input, DEFAULT_BLINK_SPEED};
use infinite_widgets::Theme;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Text before the input (default: `> `).
    pub prompt: String,
    pub placeholder: String,
    /// Initial buffer contents.
    pub default_value: String,
    /// Maximum characters, 0 for no limit (default: 0).
    pub char_limit: usize,
    pub echo_mode: EchoMode,
    pub cursor_mode: CursorMode,
    /// Blink phase length (default: 530ms).
    pub blink_speed: Duration,
    pub theme: Theme,
    pub output: OutputTarget,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            prompt: "> ".into(),
            placeholder: String::new(),
            default_value: String::new(),
            char_limit: 0,
            echo_mode: EchoMode::Normal,
            cursor_mode: CursorMode::Blink,
            blink_speed: DEFAULT_BLINK_SPEED,
            theme: Theme::default(),
            output: OutputTarget::default(),
        }
    }
}

impl TextOptions {
    pub(crate) fn build(&self) -> Result<Input, InfError> {
        let default_len = self.default_value.chars().count();
        if self.char_limit > 0 && default_len > self.char_limit {
            return Err(invalid(format!(
                "default value has {default_len} characters but the limit is {}",
                self.char_limit
            )));
        }
        if self.cursor_mode == CursorMode::Blink && self.blink_speed.is_zero() {
            return Err(invalid("blink speed must be positive"));
        }
        Ok(Input::new()
            .with_prompt(self.prompt.clone())
            .with_placeholder(self.placeholder.clone())
            .with_char_limit(self.char_limit)
            .with_echo_mode(self.echo_mode)
            .with_cursor_mode(self.cursor_mode)
            .with_blink_speed(self.blink_speed)
            .with_theme(self.theme.clone())
            .with_value(&self.default_value))
    }
}

/// Ask for one line of text.
///
/// ```rust,ignore
/// let name = Text::new(TextOptions {
///     prompt: "Name: ".into(),
///     placeholder: "anonymous".into(),
///     ..TextOptions::default()
/// })?
/// .display()
/// .await?;
/// ```
pub struct Text {
    input: Input,
    output: OutputTarget,
}

impl Text {
    pub fn new(options: TextOptions) -> Result<Self, InfError> {
        Ok(Self {
            input: options.build()?,
            output: options.output,
        })
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Run until Enter or a cancel key. `Ok(None)` on cancel.
    pub async fn display(self) -> Result<Option<String>, InfError> {
        run_prompt(self.input, self.output).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = TextOptions::default();
        assert_eq!(opts.prompt, "> ");
        assert_eq!(opts.char_limit, 0);
        assert_eq!(opts.blink_speed, Duration::from_millis(530));
    }

    #[test]
    fn default_value_longer_than_limit_is_rejected() {
        let opts = TextOptions {
            default_value: "abcdef".into(),
            char_limit: 3,
            ..TextOptions::default()
        };
        assert!(matches!(Text::new(opts).err(), Some(InfError::InvalidConfig(_))));
    }

    #[test]
    fn zero_blink_speed_is_rejected() {
        let opts = TextOptions {
            blink_speed: Duration::ZERO,
            ..TextOptions::default()
        };
        assert!(Text::new(opts).is_err());

        let opts = TextOptions {
            blink_speed: Duration::ZERO,
            cursor_mode: CursorMode::Static,
            ..TextOptions::default()
        };
        assert!(Text::new(opts).is_ok());
    }

    #[test]
    fn options_reach_the_input() {
        let text = Text::new(TextOptions {
            default_value: "secret".into(),
            echo_mode: EchoMode::Password('*'),
            char_limit: 10,
            ..TextOptions::default()
        })
        .unwrap();
        assert_eq!(text.input().value(), "secret");
        assert_eq!(text.input().display_value(), "******");
        assert_eq!(text.input().char_limit(), Some(10));
        assert_eq!(text.input().prompt(), "> ");
    }
}
