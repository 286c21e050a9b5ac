//! Error handling for the Paprika sync client

use std::fmt;
use thiserror::Error;

/// Unified error type for the Paprika sync client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or transport errors (DNS, connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("Request failed with status {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// The body was not JSON, had no `result` field, or did not match the record shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// HTTP status code behind this error, if there is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for the Paprika sync client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_code() {
        let err = Error::Status {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Request failed with status 401: Unauthorized");
    }

    #[test]
    fn json_error_has_no_status() {
        let err: Error = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.status(), None);
    }
}
