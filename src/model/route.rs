//! Locations and the pages they name.
//!
//! A location is a site-style path (`/`, `/category/health`, `/search/climate%20change`,
//! `/news?title=...`). The header shows the current one, and one can be given on the
//! command line to start on a specific page.

use super::error::RouteError;
use std::fmt;

const SEARCH_PREFIX: &str = "/search";
const CATEGORY_PREFIX: &str = "/category/";
const ARTICLE_PATH: &str = "/news";

/// A page location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - latest headlines.
    Home,
    /// `/category/<key>` - headlines for one category.
    Category(String),
    /// `/search/<segment>` - search page.
    ///
    /// Holds the segment exactly as it appears in the path (still percent-encoded);
    /// decoding is the search page's job.
    Search(Option<String>),
    /// `/news?title=<title>` - article detail, identified by its headline.
    Article {
        /// Headline, decoded.
        title: String,
    },
}

impl Route {
    /// Search location for a committed term.
    pub fn search_for(term: &str) -> Self {
        Route::Search(Some(encode_segment(term)))
    }

    /// Parse a location path.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let (path_part, query) = match trimmed.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (trimmed, None),
        };
        let path_part = match path_part.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        if path_part == "/" {
            return Ok(Route::Home);
        }

        if path_part == SEARCH_PREFIX {
            return Ok(Route::Search(None));
        }

        if let Some(segment) = path_part
            .strip_prefix(SEARCH_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            if segment.contains('/') {
                return Err(RouteError::NotFound(path.to_string()));
            }
            return Ok(Route::Search(Some(segment.to_string())));
        }

        if let Some(segment) = path_part.strip_prefix(CATEGORY_PREFIX) {
            if segment.is_empty() || segment.contains('/') {
                return Err(RouteError::NotFound(path.to_string()));
            }
            let key = decode_segment(segment).ok_or_else(|| RouteError::MalformedSegment {
                path: path.to_string(),
                segment: segment.to_string(),
            })?;
            return Ok(Route::Category(key));
        }

        if path_part == ARTICLE_PATH {
            let raw_title = query
                .into_iter()
                .flat_map(|q| q.split('&'))
                .filter_map(|pair| pair.split_once('='))
                .find(|(name, _)| *name == "title")
                .map(|(_, value)| value)
                .ok_or_else(|| RouteError::NotFound(path.to_string()))?;
            let title =
                decode_query_value(raw_title).ok_or_else(|| RouteError::MalformedSegment {
                    path: path.to_string(),
                    segment: raw_title.to_string(),
                })?;
            return Ok(Route::Article { title });
        }

        Err(RouteError::NotFound(path.to_string()))
    }

    /// Path form of this location.
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Category(key) => format!("{CATEGORY_PREFIX}{}", encode_segment(key)),
            Route::Search(None) => SEARCH_PREFIX.to_string(),
            Route::Search(Some(segment)) => format!("{SEARCH_PREFIX}/{segment}"),
            Route::Article { title } => {
                format!("{ARTICLE_PATH}?title={}", encode_segment(title))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Percent-encode a value for use as a single path segment or query value.
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Decode a percent-encoded segment. `None` when the bytes are not UTF-8.
pub fn decode_segment(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(|s| s.into_owned())
}

/// Query values may also use `+` for spaces (form encoding).
fn decode_query_value(value: &str) -> Option<String> {
    decode_segment(&value.replace('+', " "))
}
