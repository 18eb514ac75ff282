//! Home feed: headlines of the configured categories, combined in order.

use super::dispatcher::{FetchRequest, Fetcher, Ticket};
use super::feed::FeedState;
use crate::model::{ArticleSummary, FetchError};

/// The home page's combined headline list.
#[derive(Debug, Clone)]
pub struct HomePage {
    categories: Vec<String>,
    feed: FeedState,
}

impl HomePage {
    /// Mount and dispatch one headlines request covering every category.
    pub fn mount(categories: &[String], page_size: u32, fetcher: &mut dyn Fetcher) -> Self {
        let mut feed = FeedState::new();
        feed.begin(
            fetcher,
            FetchRequest::Headlines {
                categories: categories.to_vec(),
                page_size,
            },
        );
        Self {
            categories: categories.to_vec(),
            feed,
        }
    }

    /// Categories in fetch order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The combined headlines.
    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    /// Mutable access to the combined headlines.
    pub fn feed_mut(&mut self) -> &mut FeedState {
        &mut self.feed
    }

    /// Deliver an outcome; returns whether it was ours.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Vec<ArticleSummary>, FetchError>) -> bool {
        self.feed.apply(ticket, result)
    }
}
