//! Colours derived from the theme context.
//!
//! Every widget takes its styles from a [`Palette`], which is built from the
//! current [`ThemeContext`] and the colour switch in [`ColorConfig`].

use crate::state::{ThemeContext, ThemeMode};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colours on, ignoring the environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Monochrome output.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

// ===== Palette =====

/// Styles used across the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Body text and page background.
    pub base: Style,
    /// Secondary text: bylines, dates, hints.
    pub muted: Style,
    /// Titles and section headings.
    pub heading: Style,
    /// Key hints, source names, spinner.
    pub accent: Style,
    /// URLs.
    pub link: Style,
    /// Failure messages.
    pub error: Style,
    /// Highlighted list row.
    pub selected: Style,
    /// Text typed into a field.
    pub input: Style,
    /// The cell under the cursor.
    pub cursor: Style,
    /// Block borders.
    pub border: Style,
}

impl Palette {
    /// Palette for the theme's mode, or the monochrome one when colours are off.
    pub fn new(theme: ThemeContext, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::monochrome();
        }
        match theme.mode() {
            ThemeMode::Dark => Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                muted: Style::default().fg(Color::Gray),
                heading: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                accent: Style::default().fg(Color::Cyan),
                link: Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
                error: Style::default().fg(Color::LightRed),
                selected: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                input: Style::default().fg(Color::White).bg(Color::DarkGray),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::DarkGray),
            },
            ThemeMode::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                muted: Style::default().fg(Color::DarkGray),
                heading: Style::default()
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                accent: Style::default().fg(Color::Blue),
                link: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
                error: Style::default().fg(Color::Red),
                selected: Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                input: Style::default().fg(Color::Black).bg(Color::Gray),
                cursor: Style::default()
                    .bg(Color::Black)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::Gray),
            },
        }
    }

    /// Modifiers only, so the UI stays usable without colour.
    fn monochrome() -> Self {
        Self {
            base: Style::default(),
            muted: Style::default().add_modifier(Modifier::DIM),
            heading: Style::default().add_modifier(Modifier::BOLD),
            accent: Style::default(),
            link: Style::default().add_modifier(Modifier::UNDERLINED),
            error: Style::default().add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            input: Style::default(),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            border: Style::default(),
        }
    }
}

// ===== Tests =====
