//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and maps
//! controller and port failures to exit codes.

use storefront_admin::AdminError;
use storefront_core::PortError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A catalog operation failed. The presenter has already shown it.
    #[error("{0}")]
    Admin(#[from] AdminError),

    /// The backend could not be set up.
    #[error("Backend error: {0}")]
    Backend(PortError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (reading prompts, writing output).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: General error
    /// - 2: Invalid input
    /// - 69: Backend unreachable (EX_UNAVAILABLE)
    /// - 74: IO error (EX_IOERR)
    /// - 78: Configuration error (EX_CONFIG)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Admin(AdminError::Validation(_)) => 2,
            Self::Admin(AdminError::Port(err)) | Self::Backend(err) => port_exit_code(err),
            Self::Admin(AdminError::StockUnavailable) => 1,
            Self::Config(_) => 78,
            Self::Io(_) => 74,
        }
    }

    /// Whether the message was already shown to the user as a notification.
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::Admin(_))
    }
}

const fn port_exit_code(err: &PortError) -> i32 {
    match err {
        PortError::Network { .. } => 69,
        PortError::ConfigMissing { .. } => 78,
        PortError::NotFound { .. }
        | PortError::BadResponse { .. }
        | PortError::InvalidResponse { .. } => 1,
    }
}

impl From<PortError> for CliError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::ConfigMissing { message } => Self::Config(message),
            other => Self::Backend(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
