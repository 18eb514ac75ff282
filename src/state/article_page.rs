//! Article detail page with related titles and share links.
//!
//! Opening an article from a list hands the [`ArticleSummary`] over directly. Only
//! a bare `/news?title=...` location has to look the article up by title, and
//! finding nothing there is an ordinary "not available" state.

use super::dispatcher::{FetchRequest, Fetcher, Ticket};
use super::feed::FeedState;
use super::load_state::LoadState;
use crate::api::EverythingQuery;
use crate::model::{ArticleSummary, FetchError};
use tracing::{debug, warn};

/// Only the best title match is wanted.
pub const LOOKUP_PAGE_SIZE: u32 = 1;
/// Number of related titles listed beside the article.
pub const RELATED_PAGE_SIZE: u32 = 8;
/// Rows the detail text moves per PageDown/PageUp.
pub const DETAIL_SCROLL_JUMP: u16 = 10;

/// How the article page learns which article to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleEntry {
    /// Opened from a list; the article is already at hand.
    Known(ArticleSummary),
    /// Opened from a location; look it up by title.
    Lookup(String),
}

/// Title up to the first `" - "` (headlines usually end in `" - <publisher>"`).
pub fn lookup_query(title: &str) -> &str {
    title.split(" - ").next().unwrap_or(title)
}

/// First two words of the title.
pub fn related_query(title: &str) -> String {
    title.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

/// Prefilled share targets for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    /// WhatsApp send link with title and URL.
    pub whatsapp: String,
    /// X/Twitter intent link.
    pub twitter: String,
    /// `mailto:` link with the title as subject.
    pub email: String,
}

impl ShareLinks {
    /// Links for `article`.
    pub fn for_article(article: &ArticleSummary) -> Self {
        let title = urlencoding::encode(&article.title);
        let url = urlencoding::encode(&article.url);
        Self {
            whatsapp: format!(
                "https://api.whatsapp.com/send?text={}",
                urlencoding::encode(&format!("{} {}", article.title, article.url))
            ),
            twitter: format!("https://twitter.com/intent/tweet?text={title}&url={url}"),
            email: format!("mailto:?subject={title}&body={url}"),
        }
    }
}

/// The article page: the article itself beside its related titles.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    title: String,
    /// `Ready(None)` means the lookup found nothing.
    article: LoadState<Option<ArticleSummary>>,
    lookup: Option<Ticket>,
    related: FeedState,
    scroll: u16,
}

impl ArticlePage {
    /// Mount and dispatch the related-titles search, plus the lookup when needed.
    pub fn mount(entry: ArticleEntry, fetcher: &mut dyn Fetcher) -> Self {
        let (title, article, lookup) = match entry {
            ArticleEntry::Known(article) => {
                (article.title.clone(), LoadState::Ready(Some(article)), None)
            }
            ArticleEntry::Lookup(title) => {
                let query =
                    EverythingQuery::new(lookup_query(&title), LOOKUP_PAGE_SIZE).in_titles();
                match fetcher.dispatch(FetchRequest::Everything(query)) {
                    Ok(ticket) => (title, LoadState::Loading, Some(ticket)),
                    Err(err) => {
                        warn!(error = %err, "Article lookup refused");
                        (title, LoadState::Failed(err.to_string()), None)
                    }
                }
            }
        };

        let mut related = FeedState::new();
        related.begin(
            fetcher,
            FetchRequest::Everything(EverythingQuery::new(
                related_query(&title),
                RELATED_PAGE_SIZE,
            )),
        );

        Self {
            title,
            article,
            lookup,
            related,
            scroll: 0,
        }
    }

    /// Headline the page was opened for.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Load state of the article; `Ready(None)` when the lookup found nothing.
    pub fn article(&self) -> &LoadState<Option<ArticleSummary>> {
        &self.article
    }

    /// The article being shown, once known.
    pub fn current(&self) -> Option<&ArticleSummary> {
        self.article.ready().and_then(Option::as_ref)
    }

    /// Related titles.
    pub fn related(&self) -> &FeedState {
        &self.related
    }

    /// Mutable access to the related titles.
    pub fn related_mut(&mut self) -> &mut FeedState {
        &mut self.related
    }

    /// First visible row of the detail text.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scroll the detail text down. The renderer clamps overshoot.
    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows);
    }

    /// Scroll the detail text up, stopping at the top.
    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Share targets, once the article is known.
    pub fn share_links(&self) -> Option<ShareLinks> {
        self.current().map(ShareLinks::for_article)
    }

    /// Deliver an outcome to the lookup or the related titles, by ticket.
    ///
    /// Returns whether either one claimed it.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Vec<ArticleSummary>, FetchError>) -> bool {
        if self.lookup == Some(ticket) {
            self.lookup = None;
            self.article = match result {
                Ok(articles) => {
                    if articles.is_empty() {
                        debug!(title = %self.title, "Article lookup found nothing");
                    }
                    LoadState::Ready(articles.into_iter().next())
                }
                Err(err) => LoadState::Failed(err.to_string()),
            };
            return true;
        }
        self.related.apply(ticket, result)
    }
}
