//! Commerce error types.
//!
//! Validation problems are not errors; they are reported as
//! [`FormErrors`](crate::checkout::FormErrors).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A form field name that is not part of the order draft.
    #[error("Unknown order field: {0}")]
    UnknownField(String),

    /// A payment method other than card or cash.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}
