//! Light/dark theme context.
//!
//! Resolved once at startup and passed to rendering explicitly. Toggling is a pure
//! function; persisting the new mode is the caller's job and best-effort.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Theme preference as configured: follow the terminal, or force a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Use the stored toggle, else the terminal's hint.
    #[default]
    System,
    /// Always start light.
    Light,
    /// Always start dark.
    Dark,
}

/// A theme name other than `system`, `light` or `dark`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme {0:?} (expected system, light or dark)")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(ThemePreference::System),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Concrete mode used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    Dark,
}

impl ThemeMode {
    /// Name as written to the state file and shown in the header.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ThemePreference {
    fn forced_mode(self) -> Option<ThemeMode> {
        match self {
            ThemePreference::System => None,
            ThemePreference::Light => Some(ThemeMode::Light),
            ThemePreference::Dark => Some(ThemeMode::Dark),
        }
    }
}

/// The mode rendering uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeContext {
    mode: ThemeMode,
}

impl ThemeContext {
    /// Context fixed to `mode`.
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Pick the startup mode: an explicit light/dark preference, then the stored
    /// choice, then the terminal's hint, then dark.
    ///
    /// Only `ThemePreference::System` lets the stored toggle through.
    pub fn resolve(
        stored: Option<ThemeMode>,
        preference: ThemePreference,
        system_hint: Option<ThemeMode>,
    ) -> Self {
        let mode = preference
            .forced_mode()
            .or(stored)
            .or(system_hint)
            .unwrap_or(ThemeMode::Dark);
        Self { mode }
    }

    /// Current mode.
    pub fn mode(self) -> ThemeMode {
        self.mode
    }

    /// Whether the current mode is dark.
    pub fn is_dark(self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        let mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        Self { mode }
    }
}

/// Interpret a `COLORFGBG` value (`"<fg>;<bg>"`, sometimes with a middle field).
///
/// Backgrounds 7 and 15 are the light greys/white of the 16-colour palette.
pub fn mode_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        7 | 15 => Some(ThemeMode::Light),
        0..=6 | 8..=14 => Some(ThemeMode::Dark),
        _ => None,
    }
}

/// The terminal's light/dark hint, if it gives one.
pub fn detect_system_mode() -> Option<ThemeMode> {
    std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(mode_from_colorfgbg)
}

/// Where a toggled mode is remembered between runs.
pub fn stored_theme_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("newsdesk").join("theme"))
}

/// Read a stored mode. Missing or unreadable files give `None`.
pub fn load_stored_mode(path: &Path) -> Option<ThemeMode> {
    let contents = std::fs::read_to_string(path).ok()?;
    match contents.trim() {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

/// Write `mode` to `path`, creating parent directories.
pub fn store_mode(path: &Path, mode: ThemeMode) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, mode.as_str())
}
