//! Handler failure types.

use thiserror::Error;

use crate::bus::SubscriptionId;

/// Result type returned by bus handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// Why a handler did not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The handler rejected the event.
    #[error("{0}")]
    Failed(String),

    /// The handler panicked.
    #[error("handler panicked: {0}")]
    Panicked(String),
}

impl HandlerError {
    pub fn failed(message: impl Into<String>) -> Self {
        HandlerError::Failed(message.into())
    }
}

/// A handler failure recorded during dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchFailure {
    /// Debug rendering of the event kind being dispatched.
    pub event: String,
    /// The subscription whose handler failed.
    pub subscription: SubscriptionId,
    pub error: HandlerError,
}
