//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// (keys, description) rows per section.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Lists",
        &[
            ("j/↓  k/↑", "Next / previous article"),
            ("g/Home  G/End", "First / last article"),
            ("Ctrl+d  Ctrl+u", "Page down / up, scrolls an open article"),
            ("Enter/l", "Open selected article"),
        ],
    ),
    (
        "Pages",
        &[
            ("Esc/h/Backspace", "Back"),
            ("H", "Home"),
            ("1-5", "Technology, Health, Entertainment, Science, Business"),
        ],
    ),
    (
        "Search",
        &[
            ("/  Ctrl+f", "Search (focuses the field on the search page)"),
            ("Enter/Esc/Tab", "Leave the search field"),
            ("Ctrl+u", "Clear the search field"),
        ],
    ),
    ("Article", &[("y", "Copy the article link")]),
    (
        "Application",
        &[("t", "Toggle light/dark theme"), ("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .style(palette.base)
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.accent),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let key_style = palette.accent.add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for (index, (section, rows)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(*section, palette.heading));
        for (keys, description) in rows.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<18}"), key_style),
                Span::styled(*description, palette.base),
            ]));
        }
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
