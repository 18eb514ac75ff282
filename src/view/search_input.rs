//! Search input widget for rendering the search field.

use super::styles::Palette;
use crate::state::DebouncedInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Split `text` at a char cursor into (before, under cursor, after).
///
/// At the end of the text the cursor sits on a blank cell.
pub(crate) fn split_at_cursor(text: &str, cursor: usize) -> (String, String, String) {
    let before: String = text.chars().take(cursor).collect();
    let mut rest = text.chars().skip(cursor);
    let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = rest.collect();
    (before, under, after)
}

/// Bordered search field. The cursor is drawn only while the field has focus.
pub struct SearchInput<'a> {
    input: &'a DebouncedInput,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    /// Widget over `input`.
    pub fn new(input: &'a DebouncedInput, focused: bool, palette: &'a Palette) -> Self {
        Self {
            input,
            focused,
            palette,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.focused {
            let (before, under, after) = split_at_cursor(self.input.text(), self.input.cursor());
            Line::from(vec![
                Span::raw(before),
                Span::styled(under, self.palette.cursor),
                Span::raw(after),
            ])
        } else {
            Line::from(self.input.text())
        };

        let title = if self.focused {
            " Search "
        } else {
            " Search (/ to edit) "
        };
        let border = if self.focused {
            self.palette.accent
        } else {
            self.palette.border
        };

        Paragraph::new(line)
            .style(self.palette.input)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(title),
            )
            .render(area, buf);
    }
}
