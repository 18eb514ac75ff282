//! News API client.
//!
//! Builds request URLs for the two endpoints the app uses (`top-headlines` and
//! `everything`), sends them through a [`Transport`], and turns the response into
//! either an ordered article list or a [`FetchError`] whose text is fit to show
//! the user.
//!
//! The transport is a trait so the client can be driven by scripted responses in
//! tests; [`http::HttpTransport`] is the real one.

pub mod http;

use crate::model::{
    ApiErrorBody, ArticleSummary, ArticlesResponse, ConfigurationError, FetchError,
    TransportError,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

pub use http::HttpTransport;

/// Status and body of an HTTP response, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, undecoded.
    pub body: String,
}

impl RawResponse {
    /// Response with the given status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can perform a GET and hand back status + body.
///
/// Implementations must be shareable across the worker threads that run fetches.
pub trait Transport: Send + Sync {
    /// Perform a GET request. Only transport-level failures are errors here;
    /// non-2xx statuses come back as a normal [`RawResponse`].
    fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// Which fields `everything` should match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchIn {
    /// Headlines only.
    Title,
}

impl SearchIn {
    fn as_param(self) -> &'static str {
        match self {
            SearchIn::Title => "title",
        }
    }
}

/// Parameters of an `everything` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EverythingQuery {
    /// Phrase to search for; sent quoted so the API matches it as a phrase.
    pub phrase: String,
    /// Restrict matching to these fields; `None` searches everywhere.
    pub search_in: Option<SearchIn>,
    /// Maximum number of articles returned.
    pub page_size: u32,
}

impl EverythingQuery {
    /// Search every field for `phrase`.
    pub fn new(phrase: impl Into<String>, page_size: u32) -> Self {
        Self {
            phrase: phrase.into(),
            search_in: None,
            page_size,
        }
    }

    /// Match titles only.
    pub fn in_titles(mut self) -> Self {
        self.search_in = Some(SearchIn::Title);
        self
    }
}

/// `{base}/top-headlines?category=<cat>&apiKey=<key>&pageSize=<n>`
pub fn top_headlines_url(base: &str, category: &str, api_key: &str, page_size: u32) -> String {
    format!(
        "{base}/top-headlines?category={}&apiKey={}&pageSize={page_size}",
        urlencoding::encode(category),
        urlencoding::encode(api_key),
    )
}

/// `{base}/everything?q="<phrase>"[&searchIn=...]&apiKey=<key>&pageSize=<n>`
pub fn everything_url(base: &str, query: &EverythingQuery, api_key: &str) -> String {
    let mut url = format!(
        "{base}/everything?q=\"{}\"",
        urlencoding::encode(&query.phrase)
    );
    if let Some(search_in) = query.search_in {
        url.push_str("&searchIn=");
        url.push_str(search_in.as_param());
    }
    url.push_str("&apiKey=");
    url.push_str(&urlencoding::encode(api_key));
    url.push_str(&format!("&pageSize={}", query.page_size));
    url
}

/// Replace the value of the `apiKey` parameter so URLs can be logged.
pub fn redact_api_key(url: &str) -> String {
    const PARAM: &str = "apiKey=";
    let Some(start) = url.find(PARAM).map(|idx| idx + PARAM.len()) else {
        return url.to_string();
    };
    let end = url[start..]
        .find('&')
        .map(|offset| start + offset)
        .unwrap_or(url.len());
    format!("{}***{}", &url[..start], &url[end..])
}

/// Message for a non-2xx status when the body carries no `message`.
pub fn generic_status_message(status: u16) -> String {
    match reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
    {
        Some(reason) => format!("HTTP error! Status: {status} {reason}"),
        None => format!("HTTP error! Status: {status}"),
    }
}

/// Turn a raw response into articles (2xx) or a status error (anything else).
pub fn interpret_response(response: RawResponse) -> Result<Vec<ArticleSummary>, TransportError> {
    if response.is_success() {
        let parsed: ArticlesResponse = serde_json::from_str(&response.body)
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        return Ok(parsed.articles);
    }

    let message = serde_json::from_str::<ApiErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| generic_status_message(response.status));

    Err(TransportError::Status {
        status: response.status,
        message,
    })
}

/// Client for the news API.
#[derive(Clone)]
pub struct NewsApi {
    base_url: String,
    api_key: Option<String>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for NewsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApi")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

impl NewsApi {
    /// Client for `base_url`. A blank `api_key` counts as missing.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            transport,
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a non-blank API key was configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The API key, or the configuration error every request must report without it.
    pub fn require_api_key(&self) -> Result<&str, ConfigurationError> {
        self.api_key
            .as_deref()
            .ok_or(ConfigurationError::MissingApiKey)
    }

    /// Top headlines for one category.
    pub fn top_headlines(
        &self,
        category: &str,
        page_size: u32,
    ) -> Result<Vec<ArticleSummary>, FetchError> {
        let key = self.require_api_key()?;
        let url = top_headlines_url(&self.base_url, category, key, page_size);
        self.get_articles(&url)
    }

    /// Full-text search.
    pub fn everything(&self, query: &EverythingQuery) -> Result<Vec<ArticleSummary>, FetchError> {
        let key = self.require_api_key()?;
        let url = everything_url(&self.base_url, query, key);
        self.get_articles(&url)
    }

    fn get_articles(&self, url: &str) -> Result<Vec<ArticleSummary>, FetchError> {
        let loggable = redact_api_key(url);
        debug!(url = %loggable, "GET");

        let response = self.transport.get(url).inspect_err(|err| {
            warn!(url = %loggable, error = %err, "Request failed");
        })?;
        let status = response.status;

        match interpret_response(response) {
            Ok(articles) => {
                debug!(url = %loggable, status, count = articles.len(), "Articles received");
                Ok(articles)
            }
            Err(err) => {
                warn!(url = %loggable, status, error = %err, "News API returned an error");
                Err(err.into())
            }
        }
    }
}
