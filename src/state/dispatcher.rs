//! Fetch dispatch: run API requests off the UI thread and hand results back.
//!
//! Every dispatch gets a [`Ticket`] from a monotonically increasing counter. Pages
//! remember the ticket of their latest request and ignore outcomes carrying any
//! other ticket, so a slow older response can never overwrite a newer one.

use crate::api::{EverythingQuery, NewsApi};
use crate::model::{ArticleSummary, FetchError, TransportError};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Identity of one dispatched request. Later dispatches compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw counter value, for logs.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Top headlines of each category, concatenated in category order.
    Headlines {
        /// Category keys, in display order.
        categories: Vec<String>,
        /// Articles per category.
        page_size: u32,
    },
    /// Full-text search.
    Everything(EverythingQuery),
}

/// Result of a dispatched request, tagged with its ticket.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Ticket handed out when the request was dispatched.
    pub ticket: Ticket,
    /// Articles in display order, or why there are none.
    pub result: Result<Vec<ArticleSummary>, FetchError>,
}

/// Something that can start fetches.
///
/// Refusing a request (e.g. no API key) is reported synchronously so the page can
/// fail without waiting on anything.
pub trait Fetcher {
    /// Start `request` and return its ticket, or refuse it up front.
    fn dispatch(&mut self, request: FetchRequest) -> Result<Ticket, FetchError>;
}

/// Run a request to completion on the current thread.
///
/// Multi-category headlines are fetched in parallel; any single failure fails the
/// whole request.
pub fn execute(api: &NewsApi, request: &FetchRequest) -> Result<Vec<ArticleSummary>, FetchError> {
    match request {
        FetchRequest::Everything(query) => api.everything(query),
        FetchRequest::Headlines {
            categories,
            page_size,
        } => match categories.as_slice() {
            [single] => api.top_headlines(single, *page_size),
            many => {
                let per_category: Vec<Result<Vec<ArticleSummary>, FetchError>> =
                    thread::scope(|scope| {
                        let handles: Vec<_> = many
                            .iter()
                            .map(|category| {
                                scope.spawn(move || api.top_headlines(category, *page_size))
                            })
                            .collect();
                        handles
                            .into_iter()
                            .map(|handle| {
                                handle.join().unwrap_or_else(|_| {
                                    Err(TransportError::Network(
                                        "headline worker panicked".to_string(),
                                    )
                                    .into())
                                })
                            })
                            .collect()
                    });

                let mut combined = Vec::new();
                for result in per_category {
                    combined.extend(result?);
                }
                Ok(combined)
            }
        },
    }
}

/// Thread-per-request dispatcher reporting back over a channel.
pub struct Dispatcher {
    api: Arc<NewsApi>,
    last_ticket: u64,
    sender: Sender<FetchOutcome>,
    receiver: Receiver<FetchOutcome>,
}

impl Dispatcher {
    /// Dispatcher sending every request through `api`.
    pub fn new(api: NewsApi) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            api: Arc::new(api),
            last_ticket: 0,
            sender,
            receiver,
        }
    }

    /// All outcomes that have arrived since the last call. Never blocks.
    pub fn drain(&self) -> Vec<FetchOutcome> {
        self.receiver.try_iter().collect()
    }

    /// Wait up to `timeout` for the next outcome.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchOutcome> {
        self.receiver.recv_timeout(timeout).ok()
    }
}

impl Fetcher for Dispatcher {
    fn dispatch(&mut self, request: FetchRequest) -> Result<Ticket, FetchError> {
        self.api.require_api_key()?;

        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        info!(ticket = ticket.get(), request = ?request, "Dispatching fetch");

        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        thread::Builder::new()
            .name(format!("fetch-{}", ticket.get()))
            .spawn(move || {
                let result = execute(&api, &request);
                if sender.send(FetchOutcome { ticket, result }).is_err() {
                    debug!(ticket = ticket.get(), "Receiver gone; dropping outcome");
                }
            })
            .map_err(|e| TransportError::Network(format!("failed to start fetch worker: {e}")))?;

        Ok(ticket)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory fetcher for page and app-state tests.

    use super::*;

    /// Records requests and hands out tickets without doing any I/O.
    #[derive(Debug, Default)]
    pub struct RecordingFetcher {
        pub requests: Vec<(Ticket, FetchRequest)>,
        pub refuse_with: Option<FetchError>,
        last: u64,
    }

    impl RecordingFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fetcher that rejects every request like a dispatcher without API key.
        pub fn without_api_key() -> Self {
            Self {
                refuse_with: Some(crate::model::ConfigurationError::MissingApiKey.into()),
                ..Self::default()
            }
        }

        pub fn last_ticket(&self) -> Option<Ticket> {
            self.requests.last().map(|(t, _)| *t)
        }

        pub fn last_request(&self) -> Option<&FetchRequest> {
            self.requests.last().map(|(_, r)| r)
        }
    }

    impl Fetcher for RecordingFetcher {
        fn dispatch(&mut self, request: FetchRequest) -> Result<Ticket, FetchError> {
            if let Some(err) = &self.refuse_with {
                return Err(err.clone());
            }
            self.last += 1;
            let ticket = Ticket(self.last);
            self.requests.push((ticket, request));
            Ok(ticket)
        }
    }
}
