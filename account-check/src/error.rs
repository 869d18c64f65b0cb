use thiserror::Error;
use std::path::PathBuf;

/// Result type alias for account-check operations
pub type Result<T> = std::result::Result<T, AccountCheckError>;

/// Errors that abort an operation as a whole.
///
/// Per-username lookup failures are not represented here: they become
/// [`crate::types::Verdict`]s through [`LookupError`].
#[derive(Debug, Error)]
pub enum AccountCheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Usernames file not found: {path}")]
    UsernamesFileNotFound { path: PathBuf },

    #[error("no usernames provided")]
    NoUsernames,

    #[error("No API token configured. Set provider.token or the HIKER_API_TOKEN environment variable")]
    MissingToken,

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl AccountCheckError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// True for conditions that mean "nothing to do" rather than a failure
    pub fn is_input_missing(&self) -> bool {
        matches!(
            self,
            Self::NoUsernames | Self::UsernamesFileNotFound { .. }
        )
    }
}

/// Failure of a single profile lookup against the data provider
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid provider response: {0}")]
    Decode(String),
}

impl LookupError {
    /// Create a transport error from any displayable cause
    pub fn transport<E: std::fmt::Display>(err: E) -> Self {
        Self::Transport(err.to_string())
    }

    /// Create a status error
    pub fn status<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = AccountCheckError::invalid_config("min delay above max delay");
        assert!(error.to_string().contains("Invalid configuration"));

        assert_eq!(AccountCheckError::NoUsernames.to_string(), "no usernames provided");

        let error = LookupError::status(500, "upstream timeout");
        assert_eq!(
            error.to_string(),
            "provider returned HTTP 500: upstream timeout"
        );
    }

    #[test]
    fn test_input_missing_classification() {
        assert!(AccountCheckError::NoUsernames.is_input_missing());
        assert!(AccountCheckError::UsernamesFileNotFound {
            path: PathBuf::from("usernames.txt")
        }
        .is_input_missing());
        assert!(!AccountCheckError::MissingToken.is_input_missing());
    }
}
