//! Article records as returned by the news API.
//!
//! These are read-only, render-only copies: each page holds the articles of its
//! latest load and drops them on the next one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publisher of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Stable source identifier, absent for many smaller publishers.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
}

/// One article summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    /// Publisher.
    pub source: ArticleSource,
    /// Byline, often missing.
    #[serde(default)]
    pub author: Option<String>,
    /// Headline, usually ending in `" - <publisher>"`.
    pub title: String,
    /// Short summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the full article.
    pub url: String,
    /// Lead image, when the publisher has one.
    #[serde(default)]
    pub url_to_image: Option<String>,
    /// Publication time as sent (RFC 3339); see [`ArticleSummary::published_at`].
    pub published_at: String,
    /// Truncated article body.
    #[serde(default)]
    pub content: Option<String>,
}

impl ArticleSummary {
    /// Source identifier, if the API knows one.
    pub fn source_id(&self) -> Option<&str> {
        self.source.id.as_deref()
    }

    /// Publisher's display name.
    pub fn source_name(&self) -> &str {
        &self.source.name
    }

    /// Lead image URL.
    pub fn image_url(&self) -> Option<&str> {
        self.url_to_image.as_deref()
    }

    /// Publication timestamp, `None` when the API sent something that is not RFC 3339.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Human-readable publication date, e.g. `March 4, 2025, 14:05:09 UTC`.
    ///
    /// Falls back to the raw string when it cannot be parsed.
    pub fn formatted_date(&self) -> String {
        match self.published_at() {
            Some(dt) => dt.format("%B %-d, %Y, %H:%M:%S UTC").to_string(),
            None => self.published_at.clone(),
        }
    }
}

/// Successful response body: `{ "status": "ok", "totalResults": n, "articles": [...] }`.
///
/// Only `articles` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticlesResponse {
    /// Articles in API order.
    pub articles: Vec<ArticleSummary>,
}

/// Error response body: `{ "status": "error", "code": "...", "message": "..." }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build an article with just a title; other fields get plausible values.
    pub fn article(title: &str) -> ArticleSummary {
        ArticleSummary {
            source: ArticleSource {
                id: None,
                name: "Example Wire".to_string(),
            },
            author: Some("Jane Reporter".to_string()),
            title: title.to_string(),
            description: Some(format!("About {title}")),
            url: format!(
                "https://example.com/{}",
                title.to_lowercase().replace(' ', "-")
            ),
            url_to_image: None,
            published_at: "2025-03-04T14:05:09Z".to_string(),
            content: Some("Body text".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": {"id": "reuters", "name": "Reuters"},
                "author": "A. Writer",
                "title": "BTC rises - Reuters",
                "description": "Bitcoin climbs.",
                "url": "https://reuters.com/btc",
                "urlToImage": "https://reuters.com/btc.jpg",
                "publishedAt": "2025-01-02T03:04:05Z",
                "content": "Bitcoin climbed on Thursday..."
            },
            {
                "source": {"id": null, "name": "Blog"},
                "author": null,
                "title": "Second",
                "description": null,
                "url": "https://blog.example/2",
                "urlToImage": null,
                "publishedAt": "2025-01-02T00:00:00Z",
                "content": null
            }
        ]
    }"#;

    #[test]
    fn deserializes_api_articles_in_order() {
        let response: ArticlesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.articles.len(), 2);

        let first = &response.articles[0];
        assert_eq!(first.title, "BTC rises - Reuters");
        assert_eq!(first.source_id(), Some("reuters"));
        assert_eq!(first.source_name(), "Reuters");
        assert_eq!(first.image_url(), Some("https://reuters.com/btc.jpg"));

        let second = &response.articles[1];
        assert_eq!(second.source_id(), None);
        assert_eq!(second.author, None);
        assert_eq!(second.description, None);
    }

    #[test]
    fn missing_optional_fields_default_to_none() {
        let json = r#"{
            "source": {"name": "Wire"},
            "title": "T",
            "url": "https://x",
            "publishedAt": "2025-01-01T00:00:00Z"
        }"#;
        let article: ArticleSummary = serde_json::from_str(json).unwrap();
        assert_eq!(article.author, None);
        assert_eq!(article.content, None);
        assert_eq!(article.image_url(), None);
    }

    #[test]
    fn response_without_articles_field_is_rejected() {
        let result: Result<ArticlesResponse, _> = serde_json::from_str(r#"{"status":"ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn formats_publication_date() {
        let article = fixtures::article("Dated");
        assert_eq!(article.formatted_date(), "March 4, 2025, 14:05:09 UTC");
    }

    #[test]
    fn unparsable_date_falls_back_to_raw_text() {
        let mut article = fixtures::article("Odd date");
        article.published_at = "yesterday".to_string();
        assert_eq!(article.published_at(), None);
        assert_eq!(article.formatted_date(), "yesterday");
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"status":"error","code":"rateLimited","message":"rate limited"}"#)
                .unwrap();
        assert_eq!(body.message.as_deref(), Some("rate limited"));

        let empty: ApiErrorBody = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert_eq!(empty.message, None);
    }
}
