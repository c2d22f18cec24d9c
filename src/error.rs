//! Error types for QBoard.

use thiserror::Error;

/// Common error type for QBoard.
#[derive(Error, Debug)]
pub enum QBoardError {
    /// Database error.
    ///
    /// This is a generic store error that wraps errors from the database
    /// backend. Errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// The acting user is not allowed to perform the operation.
    #[error("not authorized: {0}")]
    Authorization(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for QBoardError {
    fn from(e: sqlx::Error) -> Self {
        QBoardError::Database(e.to_string())
    }
}

/// Result type alias for QBoard operations.
pub type Result<T> = std::result::Result<T, QBoardError>;
