//! TUI rendering and terminal management (impure shell)

mod article_list;
mod article_view;
pub mod constants;
mod help;
mod layout;
mod search_input;
mod styles;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Palette};

use crate::config::KeyBindings;
use crate::model::AppError;
use crate::state::{store_mode, AppState, Dispatcher, Effect, ThemeMode};
use arboard::Clipboard;
use constants::SPINNER_FRAMES;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Redraw cadence while idle; also drives the loading spinner.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Shell settings that do not belong in [`AppState`].
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Colour switch from `--no-color` and `NO_COLOR`.
    pub color: ColorConfig,
    /// Where the chosen theme is remembered. `None` disables persistence.
    pub theme_path: Option<PathBuf>,
    /// Key-to-action table.
    pub key_bindings: KeyBindings,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    dispatcher: Dispatcher,
    key_bindings: KeyBindings,
    color: ColorConfig,
    theme_path: Option<PathBuf>,
    clipboard: Option<Clipboard>,
    spinner_frame: usize,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Set up the terminal in raw mode with alternate screen.
    pub fn new(
        app_state: AppState,
        dispatcher: Dispatcher,
        options: ShellOptions,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let clipboard = Clipboard::new()
            .inspect_err(|e| warn!(error = %e, "Clipboard unavailable"))
            .ok();

        Ok(Self {
            terminal,
            app_state,
            dispatcher,
            key_bindings: options.key_bindings,
            color: options.color,
            theme_path: options.theme_path,
            clipboard,
            spinner_frame: 0,
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop until the user quits.
    ///
    /// Waits for input no longer than the next debounce deadline, so a quiet
    /// period ends on time even without further key presses.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            info!("Quit requested");
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    _ => {}
                }
            } else {
                self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            }

            self.pump(Instant::now());
            self.draw()?;
        }
    }

    /// How long the loop may block waiting for input.
    fn poll_timeout(&self, now: Instant) -> Duration {
        match self.app_state.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(TICK_INTERVAL),
            None => TICK_INTERVAL,
        }
    }

    /// Deliver finished fetches and let elapsed quiet periods commit.
    fn pump(&mut self, now: Instant) {
        for outcome in self.dispatcher.drain() {
            self.app_state.apply_outcome(outcome);
        }
        self.app_state.tick(now, &mut self.dispatcher);
    }

    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C quits from anywhere, including the search field.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let effect = self.app_state.handle_key(
            key,
            &self.key_bindings,
            Instant::now(),
            &mut self.dispatcher,
        );
        if let Some(effect) = effect {
            self.perform(effect);
        }
        self.app_state.should_quit
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::CopyToClipboard(link) => self.copy_link(&link),
            Effect::PersistTheme(mode) => self.persist_theme(mode),
        }
    }

    fn copy_link(&mut self, link: &str) {
        let status = match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.set_text(link) {
                Ok(()) => {
                    info!(link, "Link copied");
                    "Link copied".to_string()
                }
                Err(e) => {
                    warn!(error = %e, "Copy failed");
                    format!("Could not copy link: {e}")
                }
            },
            None => "Could not copy link: clipboard unavailable".to_string(),
        };
        self.app_state.status = Some(status);
    }

    fn persist_theme(&mut self, mode: ThemeMode) {
        let Some(path) = &self.theme_path else {
            return;
        };
        if let Err(e) = store_mode(path, mode) {
            warn!(path = %path.display(), error = %e, "Could not save theme");
            self.app_state.status = Some(format!("Theme not saved: {e}"));
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let palette = Palette::new(self.app_state.theme, self.color);
        let spinner_frame = self.spinner_frame;
        let app_state = &self.app_state;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, app_state, &palette, spinner_frame);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Construct without touching the real terminal or clipboard.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        dispatcher: Dispatcher,
        options: ShellOptions,
    ) -> Self {
        Self {
            terminal,
            app_state,
            dispatcher,
            key_bindings: options.key_bindings,
            color: options.color,
            theme_path: options.theme_path,
            clipboard: None,
            spinner_frame: 0,
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Block until one outcome arrives (or `timeout` passes), then pump.
    pub(crate) fn wait_for_outcome(&mut self, timeout: Duration) -> bool {
        match self.dispatcher.recv_timeout(timeout) {
            Some(outcome) => {
                self.app_state.apply_outcome(outcome);
                self.pump(Instant::now());
                true
            }
            None => false,
        }
    }
}

/// Set up the terminal, run the event loop, and restore the terminal.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    app_state: AppState,
    dispatcher: Dispatcher,
    options: ShellOptions,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, dispatcher, options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{articles_body, FnTransport};
    use crate::api::{NewsApi, RawResponse};
    use crate::model::Route;
    use crate::state::{
        load_stored_mode, LoadState, Page, PageSettings, ThemeContext, DEFAULT_QUIET_PERIOD,
    };
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn settings() -> PageSettings {
        PageSettings {
            page_size: 20,
            quiet_period: DEFAULT_QUIET_PERIOD,
            home_categories: vec!["technology".to_string()],
        }
    }

    /// Every request answers with the same articles.
    fn dispatcher_returning(titles: &'static [&'static str]) -> Dispatcher {
        let transport = FnTransport(move |_url: &str| Ok(RawResponse::new(200, articles_body(titles))));
        Dispatcher::new(NewsApi::new(
            "https://newsapi.test/v2",
            Some("k".to_string()),
            Arc::new(transport),
        ))
    }

    fn create_test_app_at(route: Route, options: ShellOptions) -> TuiApp<TestBackend> {
        let mut dispatcher = dispatcher_returning(&["BTC rises", "ETH falls"]);
        let app_state = AppState::new(
            route,
            settings(),
            ThemeContext::new(ThemeMode::Dark),
            &mut dispatcher,
        );
        let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        TuiApp::new_for_test(terminal, app_state, dispatcher, options)
    }

    fn create_test_app() -> TuiApp<TestBackend> {
        create_test_app_at(Route::Home, ShellOptions::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(app: &TuiApp<TestBackend>) -> String {
        let buffer = app.terminal().backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        assert!(app.handle_key_test(key(KeyCode::Char('q'))));
    }

    #[test]
    fn handle_key_ctrl_c_returns_true_even_in_search_field() {
        let mut app = create_test_app_at(Route::Search(None), ShellOptions::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key_test(ctrl_c));
    }

    #[test]
    fn handle_key_other_returns_false() {
        let mut app = create_test_app();
        assert!(!app.handle_key_test(key(KeyCode::Char('j'))));
    }

    #[test]
    fn fetched_headlines_reach_the_screen() {
        let mut app = create_test_app();

        assert!(app.wait_for_outcome(Duration::from_secs(5)));
        app.render_test().unwrap();

        let text = screen(&app);
        assert!(text.contains("BTC rises"));
        assert!(text.contains("ETH falls"));
    }

    #[test]
    fn copy_without_clipboard_reports_in_status() {
        let mut app = create_test_app();
        assert!(app.wait_for_outcome(Duration::from_secs(5)));

        app.handle_key_test(key(KeyCode::Char('y')));

        assert_eq!(
            app.app_state().status.as_deref(),
            Some("Could not copy link: clipboard unavailable")
        );
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let path = std::env::temp_dir().join(format!(
            "newsdesk-theme-toggle-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let options = ShellOptions {
            theme_path: Some(path.clone()),
            ..ShellOptions::default()
        };
        let mut app = create_test_app_at(Route::Home, options);

        app.handle_key_test(key(KeyCode::Char('t')));

        assert_eq!(app.app_state().theme.mode(), ThemeMode::Light);
        assert_eq!(load_stored_mode(&path), Some(ThemeMode::Light));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn theme_toggle_without_path_only_changes_state() {
        let mut app = create_test_app();

        app.handle_key_test(key(KeyCode::Char('t')));

        assert_eq!(app.app_state().theme.mode(), ThemeMode::Light);
        assert_eq!(app.app_state().status, None);
    }

    #[test]
    fn poll_timeout_is_capped_by_tick_interval() {
        let app = create_test_app();
        assert_eq!(app.poll_timeout(Instant::now()), TICK_INTERVAL);
    }

    #[test]
    fn poll_timeout_shrinks_to_pending_deadline() {
        let mut app = create_test_app_at(Route::Search(None), ShellOptions::default());
        app.handle_key_test(key(KeyCode::Char('b')));
        let deadline = app.app_state().next_deadline().unwrap();

        let timeout = app.poll_timeout(deadline - Duration::from_millis(30));

        assert_eq!(timeout, Duration::from_millis(30));
        assert_eq!(app.poll_timeout(deadline + Duration::from_millis(5)), Duration::ZERO);
    }

    #[test]
    fn pump_commits_search_after_quiet_period() {
        let mut app = create_test_app_at(Route::Search(None), ShellOptions::default());
        for c in "bitcoin".chars() {
            app.handle_key_test(key(KeyCode::Char(c)));
        }
        let deadline = app.app_state().next_deadline().unwrap();

        app.pump(deadline);

        assert_eq!(app.app_state().location().to_path(), "/search/bitcoin");
        assert!(app.wait_for_outcome(Duration::from_secs(5)));
        let Page::Search(page) = app.app_state().page() else {
            panic!("expected search page");
        };
        assert!(matches!(page.feed().results(), LoadState::Ready(a) if a.len() == 2));
    }
}
