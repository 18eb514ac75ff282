//! Search page: route term, debounced input, dispatch and location sync.
//!
//! ```text
//! segment ──resolve──▶ term + input ──keystrokes──▶ input
//!                        ▲                            │ quiet period
//!                        └────────── promote ◀────────┘
//!                                      │
//!                       dispatch(term) + replace location
//! ```
//!
//! `term` is the committed query. It changes only on mount (from the location) or
//! when the debounced input promotes a value different from it.

use super::debounce::DebouncedInput;
use super::dispatcher::{FetchRequest, Fetcher, Ticket};
use super::feed::FeedState;
use crate::api::EverythingQuery;
use crate::model::route::decode_segment;
use crate::model::{ArticleSummary, FetchError, Route};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Decode the location segment into the initial term.
///
/// Absent, empty, or undecodable segments give no term.
pub fn resolve_segment(segment: Option<&str>) -> Option<String> {
    let Some(segment) = segment.filter(|s| !s.is_empty()) else {
        debug!("Search location carries no term");
        return None;
    };
    match decode_segment(segment) {
        Some(term) if !term.is_empty() => Some(term),
        Some(_) => {
            debug!("Search location carries no term");
            None
        }
        None => {
            warn!(segment, "Undecodable search segment; starting without a term");
            None
        }
    }
}

/// The search page: a debounced input over a results list.
///
/// The input starts focused, so typing goes into it until Enter, Tab or Down
/// moves focus to the results.
#[derive(Debug, Clone)]
pub struct SearchPage {
    term: Option<String>,
    input: DebouncedInput,
    feed: FeedState,
    page_size: u32,
    input_focused: bool,
}

impl SearchPage {
    /// Mount the page for a location segment, dispatching right away when the
    /// segment carries a term.
    pub fn mount(
        segment: Option<&str>,
        quiet_period: Duration,
        page_size: u32,
        fetcher: &mut dyn Fetcher,
    ) -> Self {
        let term = resolve_segment(segment);
        let input = DebouncedInput::seeded(term.clone().unwrap_or_default(), quiet_period);
        let mut page = Self {
            term: None,
            input,
            feed: FeedState::new(),
            page_size,
            input_focused: true,
        };
        if let Some(term) = term {
            info!(term = %term, "Search page mounted with term");
            page.term = Some(term.clone());
            page.dispatch(term, fetcher);
        }
        page
    }

    /// Committed query, `None` until the location or the input provides one.
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// The search field.
    pub fn input(&self) -> &DebouncedInput {
        &self.input
    }

    /// Mutable access to the search field.
    pub fn input_mut(&mut self) -> &mut DebouncedInput {
        &mut self.input
    }

    /// Results of the committed term.
    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    /// Mutable access to the results.
    pub fn feed_mut(&mut self) -> &mut FeedState {
        &mut self.feed
    }

    /// Whether keys go to the input rather than the bindings.
    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// Send keys to the input.
    pub fn focus_input(&mut self) {
        self.input_focused = true;
    }

    /// Send keys to the bindings, for moving through results.
    pub fn focus_results(&mut self) {
        self.input_focused = false;
    }

    /// When the pending edit will be promoted, so the caller can wake up for it.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.input.next_deadline()
    }

    /// Promote the input if its quiet period has elapsed.
    ///
    /// Returns the location the current history entry should be replaced with,
    /// if the commit calls for one.
    pub fn tick(&mut self, now: Instant, fetcher: &mut dyn Fetcher) -> Option<Route> {
        let promoted = self.input.poll(now)?;
        self.commit(promoted, fetcher)
    }

    /// Commit `value` as the new term.
    ///
    /// An unchanged value does nothing. Any other value (empty included) is
    /// dispatched; only non-empty values produce a location.
    pub fn commit(&mut self, value: String, fetcher: &mut dyn Fetcher) -> Option<Route> {
        if self.term.as_deref() == Some(value.as_str()) {
            debug!(term = %value, "Promoted value equals current term");
            return None;
        }
        info!(term = %value, "Search term committed");
        self.term = Some(value.clone());
        let location = (!value.is_empty()).then(|| Route::search_for(&value));
        self.dispatch(value, fetcher);
        location
    }

    /// Deliver an outcome; stale tickets are ignored.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Vec<ArticleSummary>, FetchError>) -> bool {
        self.feed.apply(ticket, result)
    }

    fn dispatch(&mut self, term: String, fetcher: &mut dyn Fetcher) {
        let query = EverythingQuery::new(term, self.page_size);
        self.feed.begin(fetcher, FetchRequest::Everything(query));
    }
}

#[cfg(test)]
#[path = "search_page_tests.rs"]
mod tests;
