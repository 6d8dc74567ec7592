//! Internal error types for backend HTTP operations.
//!
//! These errors are internal to `storefront-http` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors related to talking to the storefront backend.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The backend answered with a non-2xx status or a failure envelope.
    ///
    /// `message` is already the best human-readable text available and is
    /// displayed unchanged.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Backend error code from the envelope, if any
        code: Option<String>,
        /// Human-readable message
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Transport failure reported by a backend that does not use reqwest.
    #[error("Network error: {message}")]
    Connection {
        /// Description of the failure
        message: String,
    },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The backend base URL could not be determined.
    #[error("Configuration missing: {message}")]
    ConfigMissing {
        /// What is missing
        message: String,
    },
}

impl HttpError {
    /// HTTP status of an API failure.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_verbatim() {
        let error = HttpError::Api {
            status: 400,
            code: Some("VALIDATION_ERROR".to_string()),
            message: "Name is required".to_string(),
        };
        assert_eq!(error.to_string(), "Name is required");
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_config_missing_error_message() {
        let error = HttpError::ConfigMissing {
            message: "API_BASE not set".to_string(),
        };
        assert!(error.to_string().contains("API_BASE"));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_json_parse_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: HttpError = json_err.into();
        assert!(error.to_string().starts_with("JSON parsing error"));
    }

    #[test]
    fn test_url_parse_error_conversion() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let error: HttpError = url_err.into();
        assert!(error.to_string().starts_with("Invalid URL"));
    }
}
