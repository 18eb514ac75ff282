//! Article list with its load state and selection.
//!
//! Shared by every page that shows a list of articles. The feed remembers the
//! ticket of its latest dispatch; outcomes for any other ticket are stale.

use super::dispatcher::{FetchRequest, Fetcher, Ticket};
use super::load_state::LoadState;
use crate::model::{ArticleSummary, FetchError};
use tracing::{debug, warn};

/// A list of articles being loaded or shown, with the selected row.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    results: LoadState<Vec<ArticleSummary>>,
    pending: Option<Ticket>,
    selected: usize,
}

impl FeedState {
    /// Loading, nothing dispatched yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load state of the list.
    pub fn results(&self) -> &LoadState<Vec<ArticleSummary>> {
        &self.results
    }

    /// Ticket of the request this feed is waiting for.
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    /// Enter Loading and dispatch `request`.
    ///
    /// A refused dispatch fails the feed immediately; nothing is pending then.
    pub fn begin(&mut self, fetcher: &mut dyn Fetcher, request: FetchRequest) {
        self.results = LoadState::Loading;
        self.selected = 0;
        match fetcher.dispatch(request) {
            Ok(ticket) => self.pending = Some(ticket),
            Err(err) => {
                warn!(error = %err, "Fetch refused");
                self.fail(&err);
            }
        }
    }

    /// Give up on the pending request and show `err`.
    pub fn fail(&mut self, err: &FetchError) {
        self.pending = None;
        self.results = LoadState::Failed(err.to_string());
    }

    /// Apply the outcome of a dispatch. Returns `false` (and changes nothing) when
    /// `ticket` is not the one this feed is waiting for.
    pub fn apply(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<ArticleSummary>, FetchError>,
    ) -> bool {
        if self.pending != Some(ticket) {
            debug!(
                ticket = ticket.get(),
                awaiting = ?self.pending.map(Ticket::get),
                "Ignoring stale outcome"
            );
            return false;
        }
        self.pending = None;
        self.selected = 0;
        self.results = match result {
            Ok(articles) => LoadState::Ready(articles),
            Err(err) => LoadState::Failed(err.to_string()),
        };
        true
    }

    /// Loaded articles; empty while loading or failed.
    pub fn articles(&self) -> &[ArticleSummary] {
        self.results.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Index of the selected row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected article, once loaded.
    pub fn selected_article(&self) -> Option<&ArticleSummary> {
        self.articles().get(self.selected)
    }

    /// Select the next row.
    pub fn select_next(&mut self) {
        self.move_by(1);
    }

    /// Select the previous row.
    pub fn select_prev(&mut self) {
        self.move_by(-1);
    }

    /// Select the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Select the last row.
    pub fn select_last(&mut self) {
        self.selected = self.articles().len().saturating_sub(1);
    }

    /// Move the selection by `delta` rows, clamped to the list.
    pub fn move_by(&mut self, delta: isize) {
        let len = self.articles().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected.saturating_add_signed(delta);
        self.selected = target.min(len - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EverythingQuery;
    use crate::model::article::fixtures::article;
    use crate::model::{ConfigurationError, TransportError};
    use crate::state::dispatcher::testing::RecordingFetcher;

    fn search(term: &str) -> FetchRequest {
        FetchRequest::Everything(EverythingQuery::new(term, 20))
    }

    fn ready_feed(titles: &[&str]) -> FeedState {
        let mut fetcher = RecordingFetcher::new();
        let mut feed = FeedState::new();
        feed.begin(&mut fetcher, search("x"));
        let ticket = fetcher.last_ticket().unwrap();
        feed.apply(ticket, Ok(titles.iter().map(|t| article(t)).collect()));
        feed
    }

    #[test]
    fn begin_enters_loading_and_remembers_ticket() {
        let mut fetcher = RecordingFetcher::new();
        let mut feed = FeedState::new();

        feed.begin(&mut fetcher, search("bitcoin"));

        assert!(feed.results().is_loading());
        assert_eq!(feed.pending(), fetcher.last_ticket());
    }

    #[test]
    fn refused_dispatch_fails_immediately() {
        let mut fetcher = RecordingFetcher::without_api_key();
        let mut feed = FeedState::new();

        feed.begin(&mut fetcher, search("bitcoin"));

        assert_eq!(feed.results().error(), Some("API key is missing"));
        assert_eq!(feed.pending(), None);
        assert!(fetcher.requests.is_empty());
    }

    #[test]
    fn current_outcome_is_applied() {
        let feed = ready_feed(&["BTC rises"]);
        assert_eq!(feed.articles().len(), 1);
        assert_eq!(feed.pending(), None);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let mut fetcher = RecordingFetcher::new();
        let mut feed = FeedState::new();
        feed.begin(&mut fetcher, search("bi"));
        let old = fetcher.last_ticket().unwrap();
        feed.begin(&mut fetcher, search("bitcoin"));
        let new = fetcher.last_ticket().unwrap();

        assert!(feed.apply(new, Ok(vec![article("Newer")])));
        assert!(!feed.apply(old, Ok(vec![article("Older")])));

        assert_eq!(feed.articles()[0].title, "Newer");
    }

    #[test]
    fn late_failure_of_superseded_request_does_not_clobber_results() {
        let mut fetcher = RecordingFetcher::new();
        let mut feed = FeedState::new();
        feed.begin(&mut fetcher, search("a"));
        let old = fetcher.last_ticket().unwrap();
        feed.begin(&mut fetcher, search("b"));

        let applied = feed.apply(
            old,
            Err(TransportError::Network("connection reset".into()).into()),
        );

        assert!(!applied);
        assert!(feed.results().is_loading());
    }

    #[test]
    fn failure_outcome_carries_message() {
        let mut fetcher = RecordingFetcher::new();
        let mut feed = FeedState::new();
        feed.begin(&mut fetcher, search("bitcoin"));
        let ticket = fetcher.last_ticket().unwrap();

        feed.apply(
            ticket,
            Err(TransportError::Status {
                status: 429,
                message: "rate limited".into(),
            }
            .into()),
        );

        assert_eq!(feed.results().error(), Some("rate limited"));
    }

    #[test]
    fn fail_clears_pending() {
        let mut fetcher = RecordingFetcher::new();
        let mut feed = FeedState::new();
        feed.begin(&mut fetcher, search("bitcoin"));

        feed.fail(&ConfigurationError::MissingApiKey.into());

        assert_eq!(feed.pending(), None);
        assert!(feed.results().error().is_some());
    }

    #[test]
    fn selection_is_clamped_to_list() {
        let mut feed = ready_feed(&["a", "b", "c"]);

        feed.select_prev();
        assert_eq!(feed.selected(), 0);
        feed.select_next();
        feed.select_next();
        feed.select_next();
        assert_eq!(feed.selected(), 2);
        feed.move_by(-10);
        assert_eq!(feed.selected(), 0);
        feed.select_last();
        assert_eq!(feed.selected_article().unwrap().title, "c");
        feed.select_first();
        assert_eq!(feed.selected(), 0);
    }

    #[test]
    fn selection_on_empty_list_stays_at_zero() {
        let mut feed = ready_feed(&[]);
        feed.select_next();
        feed.select_last();
        assert_eq!(feed.selected(), 0);
        assert!(feed.selected_article().is_none());
    }
}
