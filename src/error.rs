//! Error types for Libram

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
