use http::StatusCode;
use std::fmt;

use crate::credentials::ENV_TOKEN_VAR;

/// Failure of a search request against the GitHub API.
///
/// Every kind aborts the report; the classification only shapes the message.
#[derive(Debug)]
pub enum SearchError {
    Unauthorized(String),
    RateLimited(String),
    NotFound(String),
    InvalidQuery(String),
    Api(String),
}

impl SearchError {
    /// Classify a GitHub error response by status code and message
    pub fn from_status(status: StatusCode, message: &str) -> Self {
        let lower = message.to_lowercase();
        match status {
            StatusCode::UNAUTHORIZED => SearchError::Unauthorized(message.to_string()),
            StatusCode::TOO_MANY_REQUESTS => SearchError::RateLimited(message.to_string()),
            StatusCode::FORBIDDEN if lower.contains("rate limit") => {
                SearchError::RateLimited(message.to_string())
            }
            StatusCode::NOT_FOUND => SearchError::NotFound(message.to_string()),
            StatusCode::UNPROCESSABLE_ENTITY
                if lower.contains("do not exist") || lower.contains("do not have permission") =>
            {
                SearchError::NotFound(message.to_string())
            }
            StatusCode::UNPROCESSABLE_ENTITY => SearchError::InvalidQuery(message.to_string()),
            _ => SearchError::Api(format!("{}: {}", status, message)),
        }
    }

    /// Whether waiting and asking again could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, SearchError::RateLimited(_))
    }
}

impl From<octocrab::Error> for SearchError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => {
                SearchError::from_status(source.status_code, &source.message)
            }
            other => SearchError::Api(other.to_string()),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Unauthorized(msg) => write!(
                f,
                "Authentication failed ({}). Your GitHub token may be invalid or expired.",
                msg
            ),
            SearchError::RateLimited(msg) => write!(
                f,
                "GitHub API rate limit exceeded ({}). Set {} for a higher quota.",
                msg, ENV_TOKEN_VAR
            ),
            SearchError::NotFound(msg) => write!(
                f,
                "Repository not found or no access ({}). Check the repository names.",
                msg
            ),
            SearchError::InvalidQuery(msg) => write!(f, "Search query rejected: {}", msg),
            SearchError::Api(msg) => write!(f, "GitHub API error: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}
