//! Application error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The log filter directive could not be parsed.
    #[error("Invalid log filter '{directive}': {message}")]
    LogFilter { directive: String, message: String },

    /// A global subscriber was already installed.
    #[error("Logging already initialized: {0}")]
    LoggingInit(String),
}
