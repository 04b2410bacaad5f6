//! Keybinding configuration for the list view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub next_page: Vec<String>,
    pub prev_page: Vec<String>,
    pub go_to_start: Vec<String>,
    pub go_to_end: Vec<String>,
    pub filter: Vec<String>,
    pub clear_filter: Vec<String>,
    pub open: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c"]),
            move_up: keys(&["k", "Up"]),
            move_down: keys(&["j", "Down"]),
            next_page: keys(&["l", "Right", "f", "PageDown"]),
            prev_page: keys(&["h", "Left", "b", "PageUp"]),
            go_to_start: keys(&["g", "Home"]),
            go_to_end: keys(&["G", "End"]),
            filter: keys(&["/"]),
            clear_filter: keys(&["Esc"]),
            open: keys(&["Enter"]),
        }
    }
}

impl KeybindingConfig {
    /// Map a key press to the first action bound to it.
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        let table = [
            (&self.quit, Action::Quit),
            (&self.move_up, Action::MoveUp),
            (&self.move_down, Action::MoveDown),
            (&self.next_page, Action::NextPage),
            (&self.prev_page, Action::PrevPage),
            (&self.go_to_start, Action::GoToStart),
            (&self.go_to_end, Action::GoToEnd),
            (&self.filter, Action::StartFilter),
            (&self.clear_filter, Action::ClearFilter),
            (&self.open, Action::Open),
        ];

        table
            .into_iter()
            .find(|(bindings, _)| matches_any(key, bindings))
            .map(|(_, action)| action)
            .unwrap_or(Action::None)
    }

    /// Returns the bindings that fail to parse, keyed by action name.
    pub fn invalid_bindings(&self) -> Vec<(&'static str, String)> {
        let named = [
            ("quit", &self.quit),
            ("move_up", &self.move_up),
            ("move_down", &self.move_down),
            ("next_page", &self.next_page),
            ("prev_page", &self.prev_page),
            ("go_to_start", &self.go_to_start),
            ("go_to_end", &self.go_to_end),
            ("filter", &self.filter),
            ("clear_filter", &self.clear_filter),
            ("open", &self.open),
        ];

        named
            .into_iter()
            .flat_map(|(name, bindings)| {
                bindings
                    .iter()
                    .filter(|b| parse_key_string(b).is_err())
                    .map(move |b| (name, b.clone()))
            })
            .collect()
    }
}

fn matches_any(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings
        .iter()
        .filter_map(|binding| parse_key_string(binding).ok())
        .any(|parsed| parsed.matches(key))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Shift is ignored when the binding doesn't ask for it, so "G" matches Shift+G.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == (key.modifiers & !KeyModifiers::SHIFT))
    }
}

/// Parse a key string such as `"j"`, `"PageDown"`, `"Ctrl+c"` or `"F5"`.
///
/// A lone `"+"` is the plus key itself, not a modifier separator.
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    if s == "+" {
        return Ok(KeyBinding {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
        });
    }

    let (modifier_parts, key_part) = match s.rsplit_once('+') {
        Some((mods, key)) => (mods.split('+').collect::<Vec<_>>(), key),
        None => (Vec::new(), s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    let code = parse_key_code(key_part)?;
    Ok(KeyBinding { code, modifiers })
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lowered = s.to_lowercase();
    if let Some(n) = lowered.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    match lowered.as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "backspace" | "bs" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "space" => Ok(KeyCode::Char(' ')),
        _ => Err(format!("Unknown key: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_plain_and_special_keys() {
        assert_eq!(parse_key_string("j").unwrap().code, KeyCode::Char('j'));
        assert_eq!(parse_key_string("/").unwrap().code, KeyCode::Char('/'));
        assert_eq!(parse_key_string("PageDown").unwrap().code, KeyCode::PageDown);
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("F12").unwrap().code, KeyCode::F(12));
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
    }

    #[test]
    fn test_parse_modifiers() {
        let binding = parse_key_string("Ctrl+Shift+a").unwrap();
        assert_eq!(binding.code, KeyCode::Char('a'));
        assert_eq!(binding.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key_string("Hyper+x").is_err());
        assert!(parse_key_string("F13").is_err());
        assert!(parse_key_string("NotAKey").is_err());
    }

    #[test]
    fn test_ctrl_binding_requires_ctrl() {
        let binding = parse_key_string("Ctrl+c").unwrap();
        assert!(binding.matches(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_default_actions() {
        let config = KeybindingConfig::default();

        assert_eq!(config.get_action(&press(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(
            config.get_action(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(config.get_action(&press(KeyCode::Down, KeyModifiers::NONE)), Action::MoveDown);
        assert_eq!(config.get_action(&press(KeyCode::PageUp, KeyModifiers::NONE)), Action::PrevPage);
        assert_eq!(
            config.get_action(&press(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Action::GoToEnd
        );
        assert_eq!(config.get_action(&press(KeyCode::Char('/'), KeyModifiers::NONE)), Action::StartFilter);
        assert_eq!(config.get_action(&press(KeyCode::Enter, KeyModifiers::NONE)), Action::Open);
        assert_eq!(config.get_action(&press(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
    }

    #[test]
    fn test_invalid_bindings_are_reported() {
        let config = KeybindingConfig {
            open: keys(&["Enter", "Meta+o"]),
            ..KeybindingConfig::default()
        };
        assert_eq!(config.invalid_bindings(), vec![("open", "Meta+o".to_string())]);
    }
}
