//! Top-menu search prompt (pure state transitions).
//!
//! Available on every page. Submitting a non-blank query opens the search page
//! for it; the prompt closes either way.

use crate::model::Route;

/// Prompt state. Sum type: either closed or being typed into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuPrompt {
    /// Menu bar shows the category entries.
    #[default]
    Closed,
    /// Prompt replaces the menu bar.
    Typing {
        /// Text typed so far.
        query: String,
        /// Char index into `query`.
        cursor: usize,
    },
}

impl MenuPrompt {
    /// Whether the prompt is being typed into.
    pub fn is_open(&self) -> bool {
        matches!(self, MenuPrompt::Typing { .. })
    }
}

fn byte_offset(query: &str, char_index: usize) -> usize {
    query
        .char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(query.len())
}

/// Open an empty prompt. No-op when already open.
pub fn open_prompt(state: MenuPrompt) -> MenuPrompt {
    match state {
        MenuPrompt::Closed => MenuPrompt::Typing {
            query: String::new(),
            cursor: 0,
        },
        typing => typing,
    }
}

/// Insert `ch` at the cursor.
pub fn handle_char_input(state: MenuPrompt, ch: char) -> MenuPrompt {
    match state {
        MenuPrompt::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            MenuPrompt::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        closed => closed,
    }
}

/// Delete the char before the cursor.
pub fn handle_backspace(state: MenuPrompt) -> MenuPrompt {
    match state {
        MenuPrompt::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            MenuPrompt::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor one char left.
pub fn handle_cursor_left(state: MenuPrompt) -> MenuPrompt {
    match state {
        MenuPrompt::Typing { query, cursor } => MenuPrompt::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        closed => closed,
    }
}

/// Move the cursor one char right, stopping at the end.
pub fn handle_cursor_right(state: MenuPrompt) -> MenuPrompt {
    match state {
        MenuPrompt::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            MenuPrompt::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        closed => closed,
    }
}

/// Submit the prompt. Returns the search location for a non-blank query.
///
/// The query is trimmed before it goes into the location.
pub fn submit_prompt(state: MenuPrompt) -> (MenuPrompt, Option<Route>) {
    match state {
        MenuPrompt::Typing { query, .. } => {
            let trimmed = query.trim();
            let route = (!trimmed.is_empty()).then(|| Route::search_for(trimmed));
            (MenuPrompt::Closed, route)
        }
        MenuPrompt::Closed => (MenuPrompt::Closed, None),
    }
}
