//! Error types for memos-tags.

use thiserror::Error;

/// Result type alias using memos-tags' Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for store and service operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Whether this error means the addressed record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_) | Error::Database(sqlx::Error::RowNotFound)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("tag work".to_string());
        assert_eq!(err.to_string(), "Not found: tag work");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("empty name".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty name");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("bad port".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::NotFound("x".to_string()).is_not_found());
        assert!(Error::Database(sqlx::Error::RowNotFound).is_not_found());
        assert!(!Error::InvalidInput("x".to_string()).is_not_found());
        assert!(!Error::Database(sqlx::Error::PoolTimedOut).is_not_found());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
