//! Keybinding configuration for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::sort::SortKey;
use crate::tui::event::Action;

/// Key strings bound to each normal-mode action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub search: Vec<String>,
    pub load_more: Vec<String>,
    pub dismiss: Vec<String>,
    pub open_in_browser: Vec<String>,
    pub sort_none: Vec<String>,
    pub sort_title: Vec<String>,
    pub sort_author: Vec<String>,
    pub sort_comments: Vec<String>,
    pub sort_points: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c"]),
            move_up: keys(&["k", "Up"]),
            move_down: keys(&["j", "Down"]),
            search: keys(&["/"]),
            load_more: keys(&["m", "PageDown"]),
            dismiss: keys(&["d", "Delete"]),
            open_in_browser: keys(&["o", "Enter"]),
            sort_none: keys(&["0"]),
            sort_title: keys(&["1"]),
            sort_author: keys(&["2"]),
            sort_comments: keys(&["3"]),
            sort_points: keys(&["4"]),
        }
    }
}

impl KeybindingConfig {
    /// Map a key event to an action. Earlier entries win on conflicts.
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        let table = [
            (&self.quit, Action::Quit),
            (&self.move_up, Action::MoveUp),
            (&self.move_down, Action::MoveDown),
            (&self.search, Action::Search),
            (&self.load_more, Action::LoadMore),
            (&self.dismiss, Action::Dismiss),
            (&self.open_in_browser, Action::OpenInBrowser),
            (&self.sort_none, Action::Sort(SortKey::None)),
            (&self.sort_title, Action::Sort(SortKey::Title)),
            (&self.sort_author, Action::Sort(SortKey::Author)),
            (&self.sort_comments, Action::Sort(SortKey::Comments)),
            (&self.sort_points, Action::Sort(SortKey::Points)),
        ];

        table
            .into_iter()
            .find(|(bindings, _)| {
                bindings
                    .iter()
                    .filter_map(|b| parse_key_string(b).ok())
                    .any(|binding| binding.matches(key))
            })
            .map(|(_, action)| action)
            .unwrap_or(Action::None)
    }
}

/// A parsed key binding with code and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Shift is ignored on the event side so "P" matches Shift+P.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == key.modifiers - KeyModifiers::SHIFT)
    }
}

/// Parse strings like `"d"`, `"PageDown"`, `"Ctrl+c"` or `"Ctrl+Shift+a"`.
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    // A lone "+" is a key, not a separator.
    let (prefix, key) = match s.rfind('+') {
        Some(idx) if idx + 1 < s.len() => (&s[..idx], &s[idx + 1..]),
        _ => ("", s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in prefix.split('+').filter(|p| !p.is_empty()) {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    Ok(KeyBinding {
        code: parse_key_code(key)?,
        modifiers,
    })
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = s.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        _ => return Err(format!("Unknown key: {}", s)),
    };
    Ok(code)
}
