//! # CLI Errors

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_pass_through_unchanged() {
        let err = CliError::from(StoreError::not_found("users/nobody"));
        assert_eq!(
            err.to_string(),
            "unable to find file or directory named: users/nobody"
        );
    }

    #[test]
    fn test_payload_errors_are_labelled() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = CliError::from(parse_err);
        assert!(err.to_string().starts_with("invalid payload:"));
    }
}
