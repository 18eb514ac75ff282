//! Error types for newsdesk.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all fatal failures
//!   - [`RouteError`] - A location given on the command line that maps to no page
//!   - `std::io::Error` - Terminal/TUI rendering failures
//! - [`FetchError`] - Everything that can end a page fetch in `LoadState::Failed`
//!   - [`ConfigurationError`] - Missing API key (no request is ever sent)
//!   - [`TransportError`] - Non-2xx status, network failure, undecodable body
//!
//! # Error Recovery Strategy
//!
//! Fetch errors are **non-fatal**: they are caught at the dispatcher boundary, logged,
//! and rendered by the page as a failed load. The user recovers by typing a new query
//! or navigating. Only terminal and startup errors propagate to `main`.
//!
//! An empty article list is not an error at all; it is a successful load with zero
//! results and has its own "no results" rendering.

use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The start location could not be resolved to a page.
    #[error("Invalid location: {0}")]
    Route(#[from] RouteError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the TUI cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// A location string that does not name any page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Path does not match any known route.
    #[error("no page at {0:?}")]
    NotFound(String),

    /// Path segment is not valid percent-encoded UTF-8.
    #[error("malformed segment {segment:?} in {path:?}")]
    MalformedSegment {
        /// Full path being resolved.
        path: String,
        /// Offending segment.
        segment: String,
    },
}

/// Configuration problems detected before any request is sent.
///
/// Fatal for the current page; retrying cannot help until configuration changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No API key in config file, environment, or command line.
    #[error("API key is missing")]
    MissingApiKey,
}

/// Failures talking to the news API.
///
/// The `Display` text is what the user sees below the generic error message, so
/// `Status` renders the API's own message verbatim when it sent one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Server answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `message` field of the error body, or a generic status description.
        message: String,
    },

    /// Connection, TLS, timeout or other transport-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx response whose body is not the expected JSON shape.
    #[error("Invalid response from news service: {0}")]
    Decode(String),
}

impl TransportError {
    /// HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(_) | TransportError::Decode(_) => None,
        }
    }
}

/// Any failure that ends a fetch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Request refused before sending.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Request sent and failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FetchError {
    /// Whether the failure happened before any network activity.
    pub fn is_configuration(&self) -> bool {
        matches!(self, FetchError::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_message() {
        let err = FetchError::from(ConfigurationError::MissingApiKey);
        assert_eq!(err.to_string(), "API key is missing");
        assert!(err.is_configuration());
    }

    #[test]
    fn status_error_displays_api_message_verbatim() {
        let err = FetchError::from(TransportError::Status {
            status: 429,
            message: "rate limited".to_string(),
        });
        assert_eq!(err.to_string(), "rate limited");
        assert!(!err.is_configuration());
    }

    #[test]
    fn status_accessor_only_for_status_variant() {
        let status = TransportError::Status {
            status: 401,
            message: "bad key".to_string(),
        };
        assert_eq!(status.status(), Some(401));
        assert_eq!(TransportError::Network("reset".into()).status(), None);
        assert_eq!(TransportError::Decode("eof".into()).status(), None);
    }

    #[test]
    fn route_error_converts_to_app_error() {
        let app: AppError = RouteError::NotFound("/nope".to_string()).into();
        assert!(app.to_string().contains("/nope"));
    }
}
