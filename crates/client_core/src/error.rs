//! Failures of a single products request, rendered as the text users see.

use std::fmt;

use shared::error::UnreadableBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to reach products endpoint: {0}")]
    Transport(String),
    #[error("{0}")]
    Status(HttpFailure),
    #[error("invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    UnreadableBody(#[from] UnreadableBody),
}

impl RequestError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// HTTP status code when the backend answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(failure) => Some(failure.status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Non-2xx response, displayed as `HTTP <status> <reason> - <detail>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFailure {
    pub status: u16,
    pub status_text: String,
    pub detail: String,
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if !self.status_text.is_empty() {
            write!(f, " {}", self.status_text)?;
        }
        if !self.detail.is_empty() {
            write!(f, " - {}", self.detail)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_failure_includes_status_reason_and_detail() {
        let err = RequestError::Status(HttpFailure {
            status: 500,
            status_text: "Internal Server Error".into(),
            detail: "db down".into(),
        });
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error - db down");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn http_failure_omits_empty_detail() {
        let failure = HttpFailure {
            status: 503,
            status_text: "Service Unavailable".into(),
            detail: String::new(),
        };
        assert_eq!(failure.to_string(), "HTTP 503 Service Unavailable");
    }

    #[test]
    fn http_failure_without_reason_has_single_spaces() {
        let failure = HttpFailure {
            status: 520,
            status_text: String::new(),
            detail: "origin error".into(),
        };
        assert_eq!(failure.to_string(), "HTTP 520 - origin error");

        let bare = HttpFailure {
            detail: String::new(),
            ..failure
        };
        assert_eq!(bare.to_string(), "HTTP 520");
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = RequestError::transport("connection refused");
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }
}
