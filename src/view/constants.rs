//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header bar (brand, location, theme).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the top menu (categories and search prompt).
pub const MENU_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines.
///
/// Includes border and text input area.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the home page introduction.
pub const INTRO_HEIGHT: u16 = 3;

/// Width of the category sidebar on the home page.
pub const SIDEBAR_WIDTH: u16 = 26;

/// Width percentage of the related-titles pane on the article page.
pub const RELATED_PANE_WIDTH_PERCENT: u16 = 35;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Braille spinner shown while a page is loading.
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
