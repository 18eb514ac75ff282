//! Article lists and load-state placeholders.

use super::constants::SPINNER_FRAMES;
use super::styles::Palette;
use crate::model::ArticleSummary;
use crate::state::{FeedState, LoadState};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// First line of every failed load.
pub const ERROR_HEADLINE: &str = "An error occurred while loading the data";
/// Second line of every failed load.
pub const ERROR_HINT: &str = "Please try again later";

/// What to say when a feed loads fine but has nothing in it.
#[derive(Debug, Clone, Copy)]
pub struct EmptyText(pub &'static str);

/// Home and category feeds.
pub const NO_ARTICLES: EmptyText = EmptyText("No articles available right now");
/// Search results.
pub const NO_RESULTS: EmptyText = EmptyText("No results found for this search");
/// Related titles beside an article.
pub const NO_RELATED: EmptyText = EmptyText("No related titles");

/// Spinner glyph for `frame_index` plus the loading label.
pub fn spinner_line(frame_index: usize, palette: &Palette) -> Line<'static> {
    let glyph = SPINNER_FRAMES[frame_index % SPINNER_FRAMES.len()];
    Line::from(vec![
        Span::styled(glyph, palette.accent),
        Span::styled(" Loading...", palette.muted),
    ])
}

/// The generic failure text followed by the specific message.
pub fn error_text(message: &str, palette: &Palette) -> Text<'static> {
    Text::from(vec![
        Line::styled(ERROR_HEADLINE, palette.heading),
        Line::styled(ERROR_HINT, palette.muted),
        Line::from(""),
        Line::styled(message.to_string(), palette.error),
    ])
}

/// Draw `block` with `text` centred inside it.
pub fn render_centered(frame: &mut Frame, area: Rect, text: Text<'static>, block: Block<'_>) {
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let top_pad = inner.height.saturating_sub(text.height() as u16) / 2;
    let body = Rect {
        y: inner.y + top_pad,
        height: inner.height.saturating_sub(top_pad),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}

fn list_item<'a>(article: &'a ArticleSummary, palette: &Palette) -> ListItem<'a> {
    let mut meta = vec![
        Span::styled(article.source_name(), palette.accent),
        Span::styled(" · ", palette.muted),
        Span::styled(article.formatted_date(), palette.muted),
    ];
    if let Some(author) = article.author.as_deref().filter(|a| !a.is_empty()) {
        meta.push(Span::styled(" · ", palette.muted));
        meta.push(Span::styled(author, palette.muted));
    }
    let mut lines = vec![
        Line::styled(article.title.as_str(), palette.heading),
        Line::from(meta),
    ];
    if let Some(description) = article.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(Line::styled(description, palette.base));
    }
    ListItem::new(Text::from(lines))
}

/// Render a feed in whichever state it is in.
pub fn render_feed(
    frame: &mut Frame,
    area: Rect,
    feed: &FeedState,
    block: Block<'_>,
    empty: EmptyText,
    spinner_frame: usize,
    palette: &Palette,
) {
    match feed.results() {
        LoadState::Loading => render_centered(
            frame,
            area,
            Text::from(spinner_line(spinner_frame, palette)),
            block,
        ),
        LoadState::Failed(message) => {
            render_centered(frame, area, error_text(message, palette), block)
        }
        LoadState::Ready(articles) if articles.is_empty() => render_centered(
            frame,
            area,
            Text::styled(empty.0, palette.heading),
            block,
        ),
        LoadState::Ready(articles) => {
            let items: Vec<ListItem> = articles.iter().map(|a| list_item(a, palette)).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(palette.selected)
                .highlight_symbol("▌");
            let mut state = ListState::default().with_selected(Some(feed.selected()));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}
