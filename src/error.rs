//! Error types for the client helpers.
//!
//! The middleware and the list parser never fail; every fallible operation in
//! this crate sits on the client side (URL parsing, body encoding, transport).

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors produced while building, sending or reading HTTP requests.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The request URL could not be parsed
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter value could not be form-encoded
    #[error("form encoding error: {0}")]
    Form(String),

    /// Transport-level failure reported by the HTTP client
    #[error("http error: {0}")]
    Http(String),

    /// The request did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Invalid client or server configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl FlowError {
    /// Whether this error came from an elapsed request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FlowError::Timeout)
    }
}

impl From<reqwest::Error> for FlowError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FlowError::Timeout
        } else {
            FlowError::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_conversion() {
        let err: FlowError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, FlowError::InvalidUrl(_)));
        assert!(err.to_string().starts_with("invalid url"));
    }

    #[test]
    fn test_is_timeout() {
        assert!(FlowError::Timeout.is_timeout());
        assert!(!FlowError::Http("reset".into()).is_timeout());
    }
}
