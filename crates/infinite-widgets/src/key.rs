//! Key binding definitions and the key map trait used by the help line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// Short description shown in the help line.
    pub description: String,
    /// Disabled bindings never match and are left out of the help line.
    pub enabled: bool,
}

/// A single key press with modifier keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Binding {
    pub fn new(key: KeyCombination, description: impl Into<String>) -> Self {
        Self::with_keys(vec![key], description)
    }

    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` triggers this binding. Always `false` when disabled.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled && self.keys.iter().any(|k| k.matches(event))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Add another key combination to this binding.
    pub fn or(mut self, key: KeyCombination) -> Self {
        self.keys.push(key);
        self
    }

    /// Key labels joined with `/`, e.g. `↑/ctrl+p`.
    pub fn keys_label(&self) -> String {
        self.keys
            .iter()
            .map(KeyCombination::label)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl KeyCombination {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Exact match on code and modifiers. Shift is ignored for characters,
    /// since the shifted character already differs.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.code != event.code {
            return false;
        }
        let mut modifiers = event.modifiers;
        if matches!(event.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        modifiers == self.modifiers
    }

    /// Short human-readable label.
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::BackTab => "shift+tab".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::PageUp => "pgup".to_string(),
            KeyCode::PageDown => "pgdn".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            other => format!("{other:?}").to_lowercase(),
        };
        let mut label = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            label.push_str("ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            label.push_str("alt+");
        }
        label.push_str(&key);
        label
    }
}

/// Types that expose their key bindings to the help line.
pub trait KeyMap {
    /// The most important bindings, in display order.
    fn short_help(&self) -> Vec<&Binding>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn binding_matches_any_key() {
        let b = Binding::new(KeyCombination::new(KeyCode::Up), "up")
            .or(KeyCombination::ctrl(KeyCode::Char('p')));
        assert!(b.matches(&press(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.matches(&press(KeyCode::Char('p'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&press(KeyCode::Char('p'), KeyModifiers::NONE)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let b = Binding::new(KeyCombination::new(KeyCode::Tab), "toggle").enabled(false);
        assert!(!b.matches(&press(KeyCode::Tab, KeyModifiers::NONE)));
    }

    #[test]
    fn plain_key_does_not_match_with_ctrl_held() {
        let b = Binding::new(KeyCombination::new(KeyCode::Char('j')), "down");
        assert!(!b.matches(&press(KeyCode::Char('j'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn shift_is_ignored_for_chars() {
        let b = Binding::new(KeyCombination::new(KeyCode::Char('Y')), "yes");
        assert!(b.matches(&press(KeyCode::Char('Y'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn keys_label_joins_combinations() {
        let b = Binding::with_keys(
            vec![
                KeyCombination::new(KeyCode::Esc),
                KeyCombination::ctrl(KeyCode::Char('c')),
            ],
            "cancel",
        );
        assert_eq!(b.keys_label(), "esc/ctrl+c");
        assert_eq!(KeyCombination::new(KeyCode::Char(' ')).label(), "space");
    }
}
