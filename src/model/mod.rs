//! Domain model types (pure).
//!
//! All types in this module are pure data; no I/O happens here.

pub mod article;
pub mod category;
pub mod error;
pub mod key_action;
pub mod route;

// Re-export for convenience
pub use article::{ApiErrorBody, ArticleSource, ArticleSummary, ArticlesResponse};
pub use category::{category_label, menu_category, Category, CATEGORIES, DEFAULT_HOME_CATEGORIES};
pub use error::{AppError, ConfigurationError, FetchError, RouteError, TransportError};
pub use key_action::KeyAction;
pub use route::Route;
