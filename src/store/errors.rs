//! # Store Errors

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    // Validation errors, raised before any locking or I/O
    #[error("missing collection - no collection name given")]
    MissingCollection,

    #[error("missing resource - record has no name")]
    MissingResource,

    // Target absent for read, read_all or delete
    #[error("unable to find file or directory named: {0}")]
    NotFound(String),

    // Filesystem failures, original error kept as source
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Create an I/O error with operation context
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a not-found error for a collection/resource target
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Returns whether this error means the target does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns whether this error was raised by name validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingCollection | Self::MissingResource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_target() {
        let err = StoreError::not_found("users/nobody");
        assert_eq!(
            err.to_string(),
            "unable to find file or directory named: users/nobody"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_classification() {
        assert!(StoreError::MissingCollection.is_validation());
        assert!(StoreError::MissingResource.is_validation());
        assert!(!StoreError::not_found("x").is_validation());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::io("failed to write record users/john", inner);

        let display = err.to_string();
        assert!(display.contains("users/john"));
        assert!(display.contains("denied"));

        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }
}
