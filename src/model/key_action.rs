//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Text entry into a focused input never goes through this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // List navigation
    /// Select the next article in the current list. Default: j/↓
    SelectNext,
    /// Select the previous article in the current list. Default: k/↑
    SelectPrev,
    /// Move selection down by a page, or scroll an open article. Default: Ctrl+d/Page Down
    PageDown,
    /// Move selection up by a page, or scroll an open article. Default: Ctrl+u/Page Up
    PageUp,
    /// Select the first article. Default: g/Home
    SelectFirst,
    /// Select the last article. Default: G/End
    SelectLast,

    // Navigation between pages
    /// Open the selected article. Default: Enter/l
    Open,
    /// Go back to the previous location. Default: Esc/Backspace/h
    Back,
    /// Go to the home feed. Default: H
    GoHome,
    /// Open a menu category by 1-based position. Default: 1-5
    OpenCategory(usize),
    /// Focus the search field (or open the top-menu search prompt). Default: /
    StartSearch,

    // Article actions
    /// Copy the article link to the clipboard. Default: y
    CopyLink,

    // Application
    /// Switch between light and dark theme. Default: t
    ToggleTheme,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_category_carries_position() {
        let action = KeyAction::OpenCategory(3);
        match action {
            KeyAction::OpenCategory(n) => assert_eq!(n, 3),
            _ => panic!("OpenCategory should match OpenCategory variant"),
        }
    }

    #[test]
    fn open_category_positions_are_distinct() {
        assert_ne!(KeyAction::OpenCategory(1), KeyAction::OpenCategory(2));
    }

    #[test]
    fn back_not_equals_go_home() {
        assert_ne!(
            KeyAction::Back,
            KeyAction::GoHome,
            "Back should not equal GoHome"
        );
    }
}
