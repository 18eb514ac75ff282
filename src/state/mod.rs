//! UI state machine.
//!
//! Pages, input and navigation are plain data with synchronous transitions. The
//! only concurrency lives in [`dispatcher`], which runs fetches on worker threads
//! and hands results back as tagged outcomes.

pub mod app_state;
pub mod article_page;
pub mod category_page;
pub mod debounce;
pub mod dispatcher;
pub mod feed;
pub mod home_page;
pub mod load_state;
pub mod navigation;
pub mod search_page;
pub mod theme;
pub mod top_menu;

// Re-export for convenience
pub use app_state::{AppState, Effect, Page, PageSettings};
pub use article_page::{ArticleEntry, ArticlePage, ShareLinks};
pub use category_page::CategoryPage;
pub use debounce::{DebouncedInput, DEFAULT_QUIET_PERIOD};
pub use dispatcher::{Dispatcher, FetchOutcome, FetchRequest, Fetcher, Ticket};
pub use feed::FeedState;
pub use home_page::HomePage;
pub use load_state::LoadState;
pub use navigation::History;
pub use search_page::SearchPage;
pub use theme::{
    detect_system_mode, load_stored_mode, store_mode, stored_theme_path, ThemeContext, ThemeMode,
    ThemePreference,
};
pub use top_menu::MenuPrompt;
