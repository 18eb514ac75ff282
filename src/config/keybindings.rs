//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Terminals disagree on whether shifted symbols like `?` carry SHIFT, so a
    /// character key that misses is retried without it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        use crossterm::event::{KeyCode, KeyModifiers};

        self.bindings.get(&key).copied().or_else(|| match key.code {
            KeyCode::Char(_) if key.modifiers == KeyModifiers::SHIFT => self
                .bindings
                .get(&KeyEvent::new(key.code, KeyModifiers::NONE))
                .copied(),
            _ => None,
        })
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Vim-style selection
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::SelectNext,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::SelectPrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::SelectFirst,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::SelectLast,
        );

        // Arrow keys
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::SelectNext,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::SelectPrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::SelectFirst,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::SelectLast,
        );

        // Page navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );

        // Opening and leaving pages
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::Open,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            KeyAction::Open,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::Open,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Back,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            KeyAction::Back,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::Back,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::Back,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT),
            KeyAction::GoHome,
        );

        // Category menu (1-5, menu order)
        for position in 1..=crate::model::CATEGORIES.len() {
            if let Some(digit) = char::from_digit(position as u32, 10) {
                bindings.insert(
                    KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE),
                    KeyAction::OpenCategory(position),
                );
            }
        }

        // Search
        bindings.insert(
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
            KeyAction::StartSearch,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL),
            KeyAction::StartSearch,
        );

        // Article
        bindings.insert(
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE),
            KeyAction::CopyLink,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
            KeyAction::ToggleTheme,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn default_bindings_map_number_keys_to_menu_categories() {
        let bindings = KeyBindings::default();

        for position in 1..=5 {
            let digit = char::from_digit(position as u32, 10).unwrap();
            let key_event = KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE);
            assert_eq!(
                bindings.get(key_event),
                Some(KeyAction::OpenCategory(position)),
                "'{digit}' should open menu category {position}"
            );
        }
    }

    #[test]
    fn default_bindings_have_no_sixth_category() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('6'), KeyModifiers::NONE);
        assert_eq!(bindings.get(key_event), None);
    }

    #[test]
    fn default_bindings_map_slash_to_start_search() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE);

        assert_eq!(
            bindings.get(key_event),
            Some(KeyAction::StartSearch),
            "'/' should start search"
        );
    }

    #[test]
    fn default_bindings_map_esc_to_back() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(bindings.get(key_event), Some(KeyAction::Back));
    }

    #[test]
    fn default_bindings_map_t_to_toggle_theme() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(bindings.get(key_event), Some(KeyAction::ToggleTheme));
    }

    #[test]
    fn shifted_symbol_falls_back_to_unshifted_binding() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(bindings.get(key_event), Some(KeyAction::Help));
    }

    #[test]
    fn shift_fallback_does_not_apply_to_other_modifiers() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        assert_eq!(bindings.get(key_event), None);
    }
}
