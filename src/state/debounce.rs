//! Debounced text input (pure state transitions).
//!
//! The visible buffer changes on every keystroke; the committed value only
//! changes once typing has paused for the quiet period. Time is passed in by the
//! caller, so everything here is testable without sleeping.

use std::time::{Duration, Instant};

/// Quiet period used by the search page unless configured otherwise.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(600);

/// Text field whose edits are promoted after a quiet period.
///
/// Cursor is a char index (not a byte index) so multi-byte input edits cleanly.
#[derive(Debug, Clone)]
pub struct DebouncedInput {
    text: String,
    cursor: usize,
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl DebouncedInput {
    /// Empty field.
    pub fn new(quiet_period: Duration) -> Self {
        Self::seeded(String::new(), quiet_period)
    }

    /// Field showing `text` with the cursor at the end and nothing pending.
    pub fn seeded(text: impl Into<String>, quiet_period: Duration) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            quiet_period,
            deadline: None,
        }
    }

    /// Visible buffer, including edits not yet committed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// How long typing must pause before the buffer is committed.
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Whether an edit is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending edit becomes promotable, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Replace the buffer and restart the quiet period.
    ///
    /// Any earlier pending deadline is discarded: only the latest edit can fire.
    pub fn set_input_text(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
        self.restart(now);
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, ch: char, now: Instant) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        self.restart(now);
    }

    /// Delete the character before the cursor. No-op (and no restart) at position 0.
    pub fn backspace(&mut self, now: Instant) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        self.restart(now);
    }

    /// Delete the character under the cursor. No-op at the end.
    pub fn delete(&mut self, now: Instant) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        self.restart(now);
    }

    /// Empty the field. Clearing is an edit like any other and gets promoted.
    pub fn clear(&mut self, now: Instant) {
        self.set_input_text(String::new(), now);
    }

    /// Move cursor left by one position. Saturates at 0.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right by one position. Saturates at the text length.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    /// Move cursor to the start.
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor past the last char.
    pub fn cursor_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Promote the buffer if the quiet period has elapsed.
    ///
    /// Returns the promoted text exactly once per quiet period; `None` while
    /// typing is still in progress or when nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.text.clone())
            }
            _ => None,
        }
    }

    fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_period);
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
