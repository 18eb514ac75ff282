//! Load state of a page's data fetch.

/// Exactly one of loading, loaded, or failed.
///
/// Sum type: a page can never be both showing results and an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Request outstanding (or not yet issued).
    Loading,
    /// Last request succeeded.
    Ready(T),
    /// Last request failed; message is shown under the generic error text.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            LoadState::Loading | LoadState::Ready(_) => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}
