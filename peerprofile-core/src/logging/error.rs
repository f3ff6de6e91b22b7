//! Error types for the logging subsystem

use thiserror::Error;

/// Errors that can occur in the logging subsystem
#[derive(Debug, Clone, Error)]
pub enum LoggingError {
    /// Failed to install the global subscriber
    #[error("Failed to initialize logging: {0}")]
    InitFailed(String),

    /// A level string could not be parsed
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}
