//! Errors and outcomes of controller operations.
//!
//! Every error is also shown to the user as a notification before it is
//! returned, so callers only need the value for control flow and exit codes.

use storefront_core::{PortError, Product, ValidationError};
use thiserror::Error;

/// Semantic errors for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A resource client call failed.
    #[error("{0}")]
    Port(#[from] PortError),

    /// A stock operation was requested but no stock client is configured.
    #[error("stock service is not available")]
    StockUnavailable,
}

impl AdminError {
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result of an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(Product),
    /// Nothing changed; no request was sent.
    Unchanged,
    Cancelled,
}

/// Result of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Result of a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The listing was fetched and rendered.
    Applied,
    /// A newer refresh started meanwhile; this response was dropped.
    Stale,
    /// Navigation was not possible; nothing was fetched.
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err = AdminError::from(ValidationError::NameRequired);
        assert_eq!(err.to_string(), "Name is required");
        assert!(err.is_validation());

        let err = AdminError::from(PortError::NotFound {
            message: "Product not found: 4".to_string(),
        });
        assert_eq!(err.to_string(), "Product not found: 4");
        assert!(!err.is_validation());
    }
}
