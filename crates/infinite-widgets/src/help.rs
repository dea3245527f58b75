//! One-line key binding help shown under a prompt.

use crate::key::{Binding, KeyMap};
use crate::theme::Theme;
use ratatui::text::{Line, Span};

/// Separator between help entries.
pub const SEPARATOR: &str = " • ";

/// Render the short help for `keymap`: `key description` pairs joined by
/// [`SEPARATOR`]. Disabled bindings are skipped.
pub fn short_help_line(keymap: &impl KeyMap, theme: &Theme) -> Line<'static> {
    bindings_line(&keymap.short_help(), theme)
}

/// Render a help line from an explicit binding list.
pub fn bindings_line(bindings: &[&Binding], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for binding in bindings.iter().filter(|b| b.enabled) {
        if !spans.is_empty() {
            spans.push(Span::styled(SEPARATOR, theme.help_description));
        }
        spans.push(Span::styled(binding.keys_label(), theme.help_key));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(binding.description.clone(), theme.help_description));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyCombination;
    use crossterm::event::KeyCode;

    struct Keys {
        confirm: Binding,
        toggle: Binding,
        cancel: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.confirm, &self.toggle, &self.cancel]
        }
    }

    #[test]
    fn short_help_skips_disabled_bindings() {
        let keys = Keys {
            confirm: Binding::new(KeyCombination::new(KeyCode::Enter), "confirm"),
            toggle: Binding::new(KeyCombination::new(KeyCode::Tab), "toggle").enabled(false),
            cancel: Binding::new(KeyCombination::new(KeyCode::Esc), "cancel"),
        };
        let line = short_help_line(&keys, &Theme::default());
        assert_eq!(line.to_string(), "enter confirm • esc cancel");
    }

    #[test]
    fn empty_keymap_renders_empty_line() {
        let line = bindings_line(&[], &Theme::default());
        assert_eq!(line.to_string(), "");
    }
}
