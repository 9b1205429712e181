//! Route backend error types.

/// Errors from fetching or parsing route documents.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The backend reported failure (`success: false`)
    #[error("backend error: {0}")]
    Backend(String),

    /// The document could not be parsed or converted
    #[error("malformed route document: {message}")]
    MalformedDocument {
        message: String,
        /// First 500 characters of the offending body, when available
        body: Option<String>,
    },

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid credentials or unauthorized
    #[error("unauthorized")]
    Unauthorized,

    /// Rate limited by the backend
    #[error("rate limited by route backend")]
    RateLimited,

    /// Reading route documents from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Longest body excerpt kept in a `MalformedDocument` error.
pub(crate) const BODY_EXCERPT_CHARS: usize = 500;

impl RouteError {
    /// Build a `MalformedDocument` error, keeping a short excerpt of `body`.
    pub(crate) fn malformed(message: impl ToString, body: Option<&str>) -> Self {
        RouteError::MalformedDocument {
            message: message.to_string(),
            body: body.map(|b| b.chars().take(BODY_EXCERPT_CHARS).collect()),
        }
    }
}
