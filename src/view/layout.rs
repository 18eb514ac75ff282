//! Screen layout: header, top menu, page body, status bar.

use super::article_list::{render_centered, render_feed, NO_ARTICLES, NO_RESULTS};
use super::article_view::render_article_page;
use super::constants::{
    HEADER_HEIGHT, INTRO_HEIGHT, MENU_HEIGHT, SEARCH_INPUT_HEIGHT, SIDEBAR_WIDTH,
    STATUS_BAR_HEIGHT,
};
use super::help::render_help_overlay;
use super::search_input::{split_at_cursor, SearchInput};
use super::styles::Palette;
use crate::model::{Route, CATEGORIES};
use crate::state::{AppState, CategoryPage, HomePage, MenuPrompt, Page, SearchPage};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Search page placeholder before any term is committed.
pub const START_TYPING_HINT: &str = "Start typing to search for news";

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette, spinner_frame: usize) {
    frame.render_widget(Block::default().style(palette.base), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(MENU_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, palette);
    render_menu(frame, chunks[1], state, palette);

    match state.page() {
        Page::Home(page) => render_home(frame, chunks[2], page, spinner_frame, palette),
        Page::Category(page) => render_category(frame, chunks[2], page, spinner_frame, palette),
        Page::Search(page) => render_search(frame, chunks[2], page, spinner_frame, palette),
        Page::Article(page) => render_article_page(frame, chunks[2], page, spinner_frame, palette),
    }

    render_status_bar(frame, chunks[3], state, palette);

    if state.help_visible {
        render_help_overlay(frame, palette);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let line = Line::from(vec![
        Span::styled(" newsdesk ", palette.selected),
        Span::raw(" "),
        Span::styled(state.location().to_path(), palette.muted),
    ]);
    let theme = Line::styled(format!("{} ", state.theme.mode()), palette.muted).right_aligned();
    frame.render_widget(Paragraph::new(line), area);
    frame.render_widget(Paragraph::new(theme), area);
}

fn render_menu(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    if let MenuPrompt::Typing { query, cursor } = &state.prompt {
        let (before, under, after) = split_at_cursor(query, *cursor);
        let line = Line::from(vec![
            Span::styled(" Search: ", palette.accent),
            Span::raw(before),
            Span::styled(under, palette.cursor),
            Span::raw(after),
        ]);
        frame.render_widget(Paragraph::new(line).style(palette.input), area);
        return;
    }

    let active_category = match state.location() {
        Route::Category(key) => Some(key.as_str()),
        _ => None,
    };
    let mut spans = vec![
        Span::styled(" H ", palette.accent),
        Span::styled("Home", menu_style(*state.location() == Route::Home, palette)),
    ];
    for (index, category) in CATEGORIES.iter().enumerate() {
        spans.push(Span::styled(format!("  {} ", index + 1), palette.accent));
        spans.push(Span::styled(
            category.label,
            menu_style(active_category == Some(category.key), palette),
        ));
    }
    spans.push(Span::styled("  / ", palette.accent));
    spans.push(Span::styled(
        "Search",
        menu_style(matches!(state.location(), Route::Search(_)), palette),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn menu_style(active: bool, palette: &Palette) -> ratatui::style::Style {
    if active {
        palette.heading
    } else {
        palette.base
    }
}

fn render_home(
    frame: &mut Frame,
    area: Rect,
    page: &HomePage,
    spinner_frame: usize,
    palette: &Palette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INTRO_HEIGHT), Constraint::Min(0)])
        .split(area);
    let intro = Text::from(vec![
        Line::styled("The latest international and national news", palette.heading),
        Line::styled("Find breaking news.", palette.muted),
    ]);
    frame.render_widget(
        Paragraph::new(intro).block(Block::default().padding(Padding::new(1, 1, 1, 0))),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
        .split(rows[1]);

    render_feed(
        frame,
        columns[0],
        page.feed(),
        Block::default().padding(Padding::horizontal(1)),
        NO_ARTICLES,
        spinner_frame,
        palette,
    );

    let sidebar: Vec<Line> = CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| {
            Line::from(vec![
                Span::styled(format!(" {} ", index + 1), palette.accent),
                Span::styled(category.label, palette.base),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(sidebar).block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(palette.border)
                .title(Line::styled(" Categories ", palette.heading)),
        ),
        columns[1],
    );
}

fn render_category(
    frame: &mut Frame,
    area: Rect,
    page: &CategoryPage,
    spinner_frame: usize,
    palette: &Palette,
) {
    let heading = page.heading();
    render_feed(
        frame,
        area,
        page.feed(),
        Block::default()
            .padding(Padding::horizontal(1))
            .title(Line::styled(format!(" {heading} "), palette.heading)),
        NO_ARTICLES,
        spinner_frame,
        palette,
    );
}

fn render_search(
    frame: &mut Frame,
    area: Rect,
    page: &SearchPage,
    spinner_frame: usize,
    palette: &Palette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SEARCH_INPUT_HEIGHT), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        SearchInput::new(page.input(), page.input_focused(), palette),
        rows[0],
    );

    let block = Block::default().padding(Padding::horizontal(1));
    match page.term() {
        None => render_centered(
            frame,
            rows[1],
            Text::styled(START_TYPING_HINT, palette.muted),
            block,
        ),
        Some(term) => {
            let title = if term.is_empty() {
                " Results ".to_string()
            } else {
                format!(" Results for \"{term}\" ")
            };
            render_feed(
                frame,
                rows[1],
                page.feed(),
                block.title(Line::styled(title, palette.heading)),
                NO_RESULTS,
                spinner_frame,
                palette,
            );
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let line = match &state.status {
        Some(message) => Line::styled(format!(" {message}"), palette.accent),
        None => Line::styled(
            " ? help  / search  1-5 categories  Esc back  t theme  q quit",
            palette.muted,
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
