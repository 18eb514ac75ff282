//! Article detail rendering.

use super::article_list::{error_text, render_centered, render_feed, spinner_line, NO_RELATED};
use super::constants::RELATED_PANE_WIDTH_PERCENT;
use super::styles::Palette;
use crate::model::ArticleSummary;
use crate::state::{ArticlePage, LoadState, ShareLinks};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Shown in place of a blank description.
pub const NO_DESCRIPTION: &str = "No description is currently available for this article.";
/// Byline when the article has no author.
pub const FALLBACK_AUTHOR: &str = "Breaking News";
/// Shown when the title lookup finds nothing.
pub const NOT_AVAILABLE: &str = "The data for this article is currently not available";

fn detail_text<'a>(article: &'a ArticleSummary, links: &ShareLinks, palette: &Palette) -> Text<'a> {
    let description = article
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION);
    let author = article
        .author
        .as_deref()
        .filter(|a| !a.trim().is_empty())
        .unwrap_or(FALLBACK_AUTHOR);

    let mut lines = vec![
        Line::styled(article.title.as_str(), palette.heading),
        Line::from(""),
        Line::styled(description, palette.base),
        Line::from(""),
        Line::styled(format!("By {author}"), palette.muted),
        Line::styled(format!("Published {}", article.formatted_date()), palette.muted),
        Line::from(""),
    ];
    if let Some(content) = article.content.as_deref().filter(|c| !c.is_empty()) {
        lines.push(Line::styled(content, palette.base));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("Source: ", palette.muted),
        Span::styled(article.source_name(), palette.accent),
    ]));
    lines.push(Line::styled(article.url.as_str(), palette.link));
    lines.push(Line::from(""));
    lines.push(Line::styled("Share", palette.heading));
    for (label, url) in [
        ("WhatsApp ", &links.whatsapp),
        ("X/Twitter", &links.twitter),
        ("E-mail   ", &links.email),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label} "), palette.accent),
            Span::styled(url.clone(), palette.link),
        ]));
    }
    lines.push(Line::styled("  y copies the link", palette.muted));
    Text::from(lines)
}

/// Article detail on the left, related titles on the right.
///
/// The detail scrolls by [`ArticlePage::scroll`] rows.
pub fn render_article_page(
    frame: &mut Frame,
    area: Rect,
    page: &ArticlePage,
    spinner_frame: usize,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - RELATED_PANE_WIDTH_PERCENT),
            Constraint::Percentage(RELATED_PANE_WIDTH_PERCENT),
        ])
        .split(area);

    let detail_block = Block::default().padding(Padding::horizontal(1));
    match page.article() {
        LoadState::Loading => render_centered(
            frame,
            chunks[0],
            Text::from(spinner_line(spinner_frame, palette)),
            detail_block,
        ),
        LoadState::Failed(message) => {
            render_centered(frame, chunks[0], error_text(message, palette), detail_block)
        }
        LoadState::Ready(None) => render_centered(
            frame,
            chunks[0],
            Text::from(vec![
                Line::styled(NOT_AVAILABLE, palette.heading),
                Line::styled("Please try again later.", palette.muted),
            ]),
            detail_block,
        ),
        LoadState::Ready(Some(article)) => {
            let links = ShareLinks::for_article(article);
            let text = detail_text(article, &links, palette);
            // Keep at least the last line on screen.
            let last_line = u16::try_from(text.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
            frame.render_widget(
                Paragraph::new(text)
                    .block(detail_block)
                    .wrap(Wrap { trim: false })
                    .scroll((page.scroll().min(last_line), 0)),
                chunks[0],
            );
        }
    }

    render_feed(
        frame,
        chunks[1],
        page.related(),
        Block::default()
            .borders(Borders::LEFT)
            .border_style(palette.border)
            .title(Line::styled(" Related titles ", palette.heading)),
        NO_RELATED,
        spinner_frame,
        palette,
    );
}
