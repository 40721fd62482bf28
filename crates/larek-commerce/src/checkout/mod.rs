//! Checkout module.
//!
//! Contains the two-step order draft, its field-group validation, and the
//! payload submitted to the order API.

mod draft;
mod fields;
mod form_errors;
mod order;
mod validation;

pub use draft::OrderDraft;
pub use fields::{FieldGroup, OrderField, OrderFields, PaymentMethod};
pub use form_errors::FormErrors;
pub use order::{OrderConfirmation, OrderResult};
pub use validation::{
    is_valid_email, is_valid_phone, normalize_whitespace, validate_contacts_group,
    validate_order_group,
};
