//! Field-group validation rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::checkout::{FormErrors, OrderField, OrderFields};

pub const PAYMENT_REQUIRED: &str = "Select a payment method";
pub const ADDRESS_REQUIRED: &str = "Enter a delivery address";
pub const EMAIL_REQUIRED: &str = "Enter an email";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const PHONE_REQUIRED: &str = "Enter a phone number";
pub const PHONE_INVALID: &str = "Invalid phone number format";

// `\s` is Unicode-aware, so this also folds non-breaking spaces.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+7|8)[0-9 \-()]{9,15}$").expect("valid phone regex"));

/// Collapse every whitespace run to one ASCII space. Ends are kept, so a
/// padded phone still fails the anchored pattern.
pub fn normalize_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").into_owned()
}

/// Non-empty and contains `@`.
pub fn is_valid_email(value: &str) -> bool {
    value.contains('@')
}

/// Leading `+7` or `8`, then 9 to 15 digits, spaces, hyphens or parentheses.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(&normalize_whitespace(value))
}

/// Errors for the payment and address step.
pub fn validate_order_group(fields: &OrderFields) -> FormErrors {
    let mut errors = FormErrors::new();
    if !fields.payment.is_set() {
        errors.insert(OrderField::Payment, PAYMENT_REQUIRED);
    }
    if fields.address.is_empty() {
        errors.insert(OrderField::Address, ADDRESS_REQUIRED);
    }
    errors
}

/// Errors for the email and phone step.
pub fn validate_contacts_group(fields: &OrderFields) -> FormErrors {
    let mut errors = FormErrors::new();

    let email = fields.email.as_str();
    if email.is_empty() {
        errors.insert(OrderField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(OrderField::Email, EMAIL_INVALID);
    }

    let phone = fields.phone.as_str();
    if phone.is_empty() {
        errors.insert(OrderField::Phone, PHONE_REQUIRED);
    } else if !is_valid_phone(phone) {
        errors.insert(OrderField::Phone, PHONE_INVALID);
    }

    errors
}
