//! Category feed: `/category/<key>`.

use super::dispatcher::{FetchRequest, Fetcher, Ticket};
use super::feed::FeedState;
use crate::model::{category_label, ArticleSummary, FetchError};
use tracing::warn;

/// Headlines for one category.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    key: String,
    label: Option<&'static str>,
    feed: FeedState,
}

impl CategoryPage {
    /// Mount for `key`. Keys missing from the category table still fetch; they just
    /// have no label.
    pub fn mount(key: &str, page_size: u32, fetcher: &mut dyn Fetcher) -> Self {
        let label = category_label(key);
        if label.is_none() {
            warn!(category = key, "Unknown category");
        }
        let mut feed = FeedState::new();
        feed.begin(
            fetcher,
            FetchRequest::Headlines {
                categories: vec![key.to_string()],
                page_size,
            },
        );
        Self {
            key: key.to_string(),
            label,
            feed,
        }
    }

    /// Category key as it appeared in the location.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display label, `None` for keys missing from the category table.
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Heading for the page: the label, or the raw key for unknown categories.
    pub fn heading(&self) -> &str {
        self.label.unwrap_or(&self.key)
    }

    /// The headline list.
    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    /// Mutable access to the headline list.
    pub fn feed_mut(&mut self) -> &mut FeedState {
        &mut self.feed
    }

    /// Deliver an outcome; returns whether the ticket belonged to this page.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Vec<ArticleSummary>, FetchError>) -> bool {
        self.feed.apply(ticket, result)
    }
}
