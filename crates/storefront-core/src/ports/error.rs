//! Error types for port operations.

use thiserror::Error;

/// Errors from resource port operations.
///
/// These are domain-level errors; transport details (HTTP, JSON) are mapped
/// to these at the adapter boundary. `NotFound` and `BadResponse` display the
/// backend's own message unchanged so it can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    /// The requested record does not exist.
    #[error("{message}")]
    NotFound {
        /// Human-readable message, usually from the backend
        message: String,
    },

    /// The backend rejected the request (non-2xx or envelope failure).
    #[error("{message}")]
    BadResponse {
        /// HTTP status, when the failure came from HTTP
        status: Option<u16>,
        /// Backend error code (e.g. `VALIDATION_ERROR`)
        code: Option<String>,
        /// Human-readable message
        message: String,
    },

    /// Transport-level failure (connection refused, DNS, TLS, ...).
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The backend answered with a body that could not be decoded.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The backend base URL could not be resolved.
    #[error("Configuration missing: {message}")]
    ConfigMissing {
        /// What is missing
        message: String,
    },
}

impl PortError {
    /// Convenience constructor for a missing entity.
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            message: format!("{entity} {id} not found"),
        }
    }

    /// Backend error code, if one was reported.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::BadResponse { code, .. } => code.as_deref(),
            Self::NotFound { .. } => Some("NOT_FOUND"),
            _ => None,
        }
    }
}

/// Result type alias for port operations.
pub type PortResult<T> = Result<T, PortError>;
