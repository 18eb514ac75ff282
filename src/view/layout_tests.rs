//! Tests for the screen layout

use super::*;
use crate::config::KeyBindings;
use crate::model::article::fixtures::article;
use crate::state::debounce::DEFAULT_QUIET_PERIOD;
use crate::state::dispatcher::testing::RecordingFetcher;
use crate::state::{FetchOutcome, PageSettings, ThemeContext, ThemeMode};
use crate::view::styles::ColorConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Instant;

fn settings() -> PageSettings {
    PageSettings {
        page_size: 20,
        quiet_period: DEFAULT_QUIET_PERIOD,
        home_categories: vec!["technology".to_string()],
    }
}

fn app_at(route: Route, fetcher: &mut RecordingFetcher) -> AppState {
    AppState::new(
        route,
        settings(),
        ThemeContext::new(ThemeMode::Dark),
        fetcher,
    )
}

fn render(state: &AppState) -> String {
    let palette = Palette::new(state.theme, ColorConfig::enabled());
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &palette, 0))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn deliver(app: &mut AppState, fetcher: &RecordingFetcher, titles: &[&str]) {
    app.apply_outcome(FetchOutcome {
        ticket: fetcher.last_ticket().unwrap(),
        result: Ok(titles.iter().map(|t| article(t)).collect()),
    });
}

#[test]
fn home_shows_intro_menu_and_sidebar() {
    let mut fetcher = RecordingFetcher::new();
    let mut app = app_at(Route::Home, &mut fetcher);
    deliver(&mut app, &fetcher, &["Chip shortage eases"]);

    let screen = render(&app);

    assert!(screen.contains("newsdesk"));
    assert!(screen.contains("The latest international and national news"));
    assert!(screen.contains("Find breaking news."));
    assert!(screen.contains("Chip shortage eases"));
    assert!(screen.contains("Categories"));
    for label in ["Technology", "Health", "Entertainment", "Science", "Business"] {
        assert!(screen.contains(label), "Missing category {label}");
    }
    assert!(screen.contains("? help"));
}

#[test]
fn menu_bar_lists_home_categories_and_search() {
    let mut fetcher = RecordingFetcher::new();
    let app = app_at(Route::Home, &mut fetcher);

    let screen = render(&app);
    let menu = screen.lines().nth(1).unwrap().trim();

    insta::assert_snapshot!(menu, @"H Home  1 Technology  2 Health  3 Entertainment  4 Science  5 Business  / Search");
}

#[test]
fn header_shows_location_and_theme() {
    let mut fetcher = RecordingFetcher::new();
    let app = app_at(Route::search_for("climate change"), &mut fetcher);

    let screen = render(&app);
    let header = screen.lines().next().unwrap();

    assert!(header.contains("/search/climate%20change"));
    assert!(header.contains("dark"));
}

#[test]
fn category_page_shows_label_as_heading() {
    let mut fetcher = RecordingFetcher::new();
    let app = app_at(Route::Category("science".into()), &mut fetcher);

    let screen = render(&app);

    assert!(screen.contains(" Science "));
    assert!(screen.contains("Loading..."));
}

#[test]
fn unknown_category_uses_key_as_heading() {
    let mut fetcher = RecordingFetcher::new();
    let app = app_at(Route::Category("weather".into()), &mut fetcher);

    assert!(render(&app).contains(" weather "));
}

#[test]
fn search_without_term_shows_hint() {
    let mut fetcher = RecordingFetcher::new();
    let app = app_at(Route::Search(None), &mut fetcher);

    let screen = render(&app);

    assert!(screen.contains("Search"));
    assert!(screen.contains(START_TYPING_HINT));
}

#[test]
fn search_results_render_under_input() {
    let mut fetcher = RecordingFetcher::new();
    let mut app = app_at(Route::search_for("bitcoin"), &mut fetcher);
    deliver(&mut app, &fetcher, &["BTC rises"]);

    let screen = render(&app);

    assert!(screen.contains("bitcoin"));
    assert!(screen.contains("Results for \"bitcoin\""));
    assert!(screen.contains("BTC rises"));
}

#[test]
fn search_with_no_matches_says_so() {
    let mut fetcher = RecordingFetcher::new();
    let mut app = app_at(Route::search_for("zzzz"), &mut fetcher);
    deliver(&mut app, &fetcher, &[]);

    assert!(render(&app).contains("No results found for this search"));
}

#[test]
fn open_prompt_replaces_menu_bar() {
    let mut fetcher = RecordingFetcher::new();
    let mut app = app_at(Route::Home, &mut fetcher);
    let bindings = KeyBindings::default();
    let now = Instant::now();
    app.handle_key(
        KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
        &bindings,
        now,
        &mut fetcher,
    );
    for c in "mars".chars() {
        app.handle_key(
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
            &bindings,
            now,
            &mut fetcher,
        );
    }

    let screen = render(&app);
    let menu = screen.lines().nth(1).unwrap();

    assert!(menu.contains("Search: mars"));
    assert!(!menu.contains("Technology"));
}

#[test]
fn status_message_replaces_key_hints() {
    let mut fetcher = RecordingFetcher::new();
    let mut app = app_at(Route::Home, &mut fetcher);
    app.status = Some("Link copied".to_string());

    let screen = render(&app);
    let status = screen.lines().last().unwrap();

    assert!(status.contains("Link copied"));
    assert!(!status.contains("? help"));
}

#[test]
fn help_overlay_draws_over_page() {
    let mut fetcher = RecordingFetcher::new();
    let mut app = app_at(Route::Home, &mut fetcher);
    app.help_visible = true;

    assert!(render(&app).contains("Keyboard Shortcuts"));
}

#[test]
fn article_page_renders_through_layout() {
    let mut fetcher = RecordingFetcher::new();
    let mut app = app_at(Route::Home, &mut fetcher);
    app.open_article(article("Mars rover lands"), &mut fetcher);

    let screen = render(&app);

    assert!(screen.contains("Mars rover lands"));
    assert!(screen.contains("Related titles"));
}

fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        result.push('\n');
    }
    result
}
