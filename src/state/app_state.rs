//! Application state and transitions.
//!
//! AppState owns the location history and the single mounted page. Entering a
//! location mounts a fresh page (which dispatches its fetches); leaving it drops
//! the page, so outcomes still in flight for it find no taker.
//!
//! Everything here is synchronous and free of terminal I/O. Fetches go through the
//! [`Fetcher`] passed in; side effects the shell must perform (clipboard, theme
//! persistence) come back as [`Effect`]s.

use super::article_page::{ArticleEntry, ArticlePage, DETAIL_SCROLL_JUMP};
use super::category_page::CategoryPage;
use super::dispatcher::{FetchOutcome, Fetcher};
use super::feed::FeedState;
use super::home_page::HomePage;
use super::navigation::History;
use super::search_page::SearchPage;
use super::theme::{ThemeContext, ThemeMode};
use super::top_menu::{self, MenuPrompt};
use crate::config::KeyBindings;
use crate::model::{menu_category, ArticleSummary, KeyAction, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// List rows moved by PageDown/PageUp.
pub const PAGE_JUMP: isize = 10;

/// Settings every page mount needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    /// Articles requested per feed.
    pub page_size: u32,
    /// Search debounce quiet period.
    pub quiet_period: Duration,
    /// Categories merged into the home feed.
    pub home_categories: Vec<String>,
}

/// The mounted page.
#[derive(Debug, Clone)]
pub enum Page {
    /// `/`
    Home(HomePage),
    /// `/category/<key>`
    Category(CategoryPage),
    /// `/search[/<term>]`
    Search(SearchPage),
    /// `/news?title=<title>`
    Article(ArticlePage),
}

impl Page {
    /// The selectable article list of this page.
    pub fn feed(&self) -> &FeedState {
        match self {
            Page::Home(page) => page.feed(),
            Page::Category(page) => page.feed(),
            Page::Search(page) => page.feed(),
            Page::Article(page) => page.related(),
        }
    }

    /// Mutable access to [`Page::feed`].
    pub fn feed_mut(&mut self) -> &mut FeedState {
        match self {
            Page::Home(page) => page.feed_mut(),
            Page::Category(page) => page.feed_mut(),
            Page::Search(page) => page.feed_mut(),
            Page::Article(page) => page.related_mut(),
        }
    }
}

/// Work the shell has to do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put this text on the system clipboard.
    CopyToClipboard(String),
    /// Store the theme for the next start.
    PersistTheme(ThemeMode),
}

/// Everything the UI shows, and the transitions between it.
#[derive(Debug, Clone)]
pub struct AppState {
    history: History,
    page: Page,
    settings: PageSettings,

    /// Light/dark context handed to rendering.
    pub theme: ThemeContext,

    /// Top-menu search prompt.
    pub prompt: MenuPrompt,

    /// Help overlay is open.
    pub help_visible: bool,

    /// One-line feedback shown in the status bar until the next key press.
    pub status: Option<String>,

    /// Set once the user asked to quit.
    pub should_quit: bool,
}

impl AppState {
    /// Start at `start`, mounting its page.
    pub fn new(
        start: Route,
        settings: PageSettings,
        theme: ThemeContext,
        fetcher: &mut dyn Fetcher,
    ) -> Self {
        let page = mount(&start, &settings, fetcher);
        Self {
            history: History::new(start),
            page,
            settings,
            theme,
            prompt: MenuPrompt::Closed,
            help_visible: false,
            status: None,
            should_quit: false,
        }
    }

    /// Current location.
    pub fn location(&self) -> &Route {
        self.history.current()
    }

    /// Visited locations, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The mounted page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Settings pages are mounted with.
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Push `route` and mount its page.
    pub fn navigate(&mut self, route: Route, fetcher: &mut dyn Fetcher) {
        info!(location = %route, "Navigating");
        self.page = mount(&route, &self.settings, fetcher);
        self.history.push(route);
    }

    /// Open an article from a list, handing the summary over directly.
    pub fn open_article(&mut self, article: ArticleSummary, fetcher: &mut dyn Fetcher) {
        let route = Route::Article {
            title: article.title.clone(),
        };
        info!(location = %route, "Opening article");
        self.page = Page::Article(ArticlePage::mount(ArticleEntry::Known(article), fetcher));
        self.history.push(route);
    }

    /// Return to the previous location, re-mounting it. `false` at the start of history.
    pub fn go_back(&mut self, fetcher: &mut dyn Fetcher) -> bool {
        let Some(route) = self.history.back().cloned() else {
            return false;
        };
        info!(location = %route, "Back");
        self.page = mount(&route, &self.settings, fetcher);
        true
    }

    /// Advance time: promote pending search input and sync the location.
    pub fn tick(&mut self, now: Instant, fetcher: &mut dyn Fetcher) {
        if let Page::Search(page) = &mut self.page {
            if let Some(location) = page.tick(now, fetcher) {
                self.history.replace(location);
            }
        }
    }

    /// When [`tick`](Self::tick) next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.page {
            Page::Search(page) => page.next_deadline(),
            _ => None,
        }
    }

    /// Hand a fetch outcome to the mounted page. `false` if it was stale.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        let FetchOutcome { ticket, result } = outcome;
        let applied = match &mut self.page {
            Page::Home(page) => page.apply(ticket, result),
            Page::Category(page) => page.apply(ticket, result),
            Page::Search(page) => page.apply(ticket, result),
            Page::Article(page) => page.apply(ticket, result),
        };
        if !applied {
            debug!(ticket = ticket.get(), "Outcome not for mounted page");
        }
        applied
    }

    /// Flip the theme. The shell persists the returned mode.
    pub fn toggle_theme(&mut self) -> Effect {
        self.theme = self.theme.toggled();
        info!(mode = %self.theme.mode(), "Theme toggled");
        Effect::PersistTheme(self.theme.mode())
    }

    /// Route one key press: open prompt first, then a focused search field, then
    /// the key bindings.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        bindings: &KeyBindings,
        now: Instant,
        fetcher: &mut dyn Fetcher,
    ) -> Option<Effect> {
        self.status = None;

        if self.help_visible {
            return match bindings.get(key) {
                Some(KeyAction::Quit) => {
                    self.should_quit = true;
                    None
                }
                Some(KeyAction::Help | KeyAction::Back) => {
                    self.help_visible = false;
                    None
                }
                _ => None,
            };
        }

        if self.prompt.is_open() {
            self.handle_prompt_key(key, fetcher);
            return None;
        }

        if let Page::Search(page) = &mut self.page {
            if page.input_focused() && handle_search_input_key(page, key, now) {
                return None;
            }
        }

        let action = bindings.get(key)?;
        self.handle_action(action, fetcher)
    }

    /// Apply a bound action to the mounted page.
    pub fn handle_action(&mut self, action: KeyAction, fetcher: &mut dyn Fetcher) -> Option<Effect> {
        match action {
            KeyAction::SelectNext => self.page.feed_mut().select_next(),
            KeyAction::SelectPrev => self.page.feed_mut().select_prev(),
            KeyAction::PageDown => match &mut self.page {
                Page::Article(page) => page.scroll_down(DETAIL_SCROLL_JUMP),
                page => page.feed_mut().move_by(PAGE_JUMP),
            },
            KeyAction::PageUp => match &mut self.page {
                Page::Article(page) => page.scroll_up(DETAIL_SCROLL_JUMP),
                page => page.feed_mut().move_by(-PAGE_JUMP),
            },
            KeyAction::SelectFirst => self.page.feed_mut().select_first(),
            KeyAction::SelectLast => self.page.feed_mut().select_last(),
            KeyAction::Open => {
                if let Some(article) = self.page.feed().selected_article().cloned() {
                    self.open_article(article, fetcher);
                }
            }
            KeyAction::Back => {
                if !self.go_back(fetcher) {
                    self.status = Some("Already at the first page".to_string());
                }
            }
            KeyAction::GoHome => {
                if *self.location() != Route::Home {
                    self.navigate(Route::Home, fetcher);
                }
            }
            KeyAction::OpenCategory(position) => {
                if let Some(category) = menu_category(position) {
                    let route = Route::Category(category.key.to_string());
                    if *self.location() != route {
                        self.navigate(route, fetcher);
                    }
                }
            }
            KeyAction::StartSearch => match &mut self.page {
                Page::Search(page) => page.focus_input(),
                _ => self.prompt = top_menu::open_prompt(std::mem::take(&mut self.prompt)),
            },
            KeyAction::CopyLink => return self.link_to_copy().map(Effect::CopyToClipboard),
            KeyAction::ToggleTheme => return Some(self.toggle_theme()),
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Quit => self.should_quit = true,
        }
        None
    }

    /// Link of the shown article, or of the selected list entry.
    fn link_to_copy(&self) -> Option<String> {
        let article = match &self.page {
            Page::Article(page) => page.current(),
            other => other.feed().selected_article(),
        };
        article.map(|a| a.url.clone())
    }

    fn handle_prompt_key(&mut self, key: KeyEvent, fetcher: &mut dyn Fetcher) {
        let prompt = std::mem::take(&mut self.prompt);
        self.prompt = match key.code {
            KeyCode::Esc => MenuPrompt::Closed,
            KeyCode::Enter => {
                let (prompt, route) = top_menu::submit_prompt(prompt);
                if let Some(route) = route {
                    self.navigate(route, fetcher);
                }
                prompt
            }
            KeyCode::Backspace => top_menu::handle_backspace(prompt),
            KeyCode::Left => top_menu::handle_cursor_left(prompt),
            KeyCode::Right => top_menu::handle_cursor_right(prompt),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                top_menu::handle_char_input(prompt, ch)
            }
            _ => prompt,
        };
    }
}

/// Edit the focused search field. Returns whether the key was consumed.
///
/// Enter only moves focus to the results; the debounce is the only way a term
/// gets committed.
fn handle_search_input_key(page: &mut SearchPage, key: KeyEvent, now: Instant) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = page.input_mut();
    match key.code {
        KeyCode::Char('u') if ctrl => input.clear(now),
        KeyCode::Char(_) if ctrl => return false,
        KeyCode::Char(ch) => input.insert_char(ch, now),
        KeyCode::Backspace => input.backspace(now),
        KeyCode::Delete => input.delete(now),
        KeyCode::Left => input.cursor_left(),
        KeyCode::Right => input.cursor_right(),
        KeyCode::Home => input.cursor_home(),
        KeyCode::End => input.cursor_end(),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::Down => page.focus_results(),
        _ => return false,
    }
    true
}

fn mount(route: &Route, settings: &PageSettings, fetcher: &mut dyn Fetcher) -> Page {
    match route {
        Route::Home => Page::Home(HomePage::mount(
            &settings.home_categories,
            settings.page_size,
            fetcher,
        )),
        Route::Category(key) => {
            Page::Category(CategoryPage::mount(key, settings.page_size, fetcher))
        }
        Route::Search(segment) => Page::Search(SearchPage::mount(
            segment.as_deref(),
            settings.quiet_period,
            settings.page_size,
            fetcher,
        )),
        Route::Article { title } => Page::Article(ArticlePage::mount(
            ArticleEntry::Lookup(title.clone()),
            fetcher,
        )),
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
