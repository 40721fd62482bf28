//! Order draft fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Nothing chosen yet.
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "cash")]
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Unset => "",
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Unset => "Not selected",
            PaymentMethod::Card => "Online",
            PaymentMethod::Cash => "On delivery",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, PaymentMethod::Unset)
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Ok(PaymentMethod::Unset),
            "card" => Ok(PaymentMethod::Card),
            "cash" => Ok(PaymentMethod::Cash),
            _ => Err(CommerceError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two independently validated subsets of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    /// Step one: payment and address.
    Order,
    /// Step two: email and phone.
    Contacts,
}

impl FieldGroup {
    pub fn fields(&self) -> [OrderField; 2] {
        match self {
            FieldGroup::Order => [OrderField::Payment, OrderField::Address],
            FieldGroup::Contacts => [OrderField::Email, OrderField::Phone],
        }
    }
}

/// A named field of the order draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    Payment,
    Address,
    Email,
    Phone,
}

impl OrderField {
    pub const ALL: [OrderField; 4] = [
        OrderField::Payment,
        OrderField::Address,
        OrderField::Email,
        OrderField::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Payment => "payment",
            OrderField::Address => "address",
            OrderField::Email => "email",
            OrderField::Phone => "phone",
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            OrderField::Payment | OrderField::Address => FieldGroup::Order,
            OrderField::Email | OrderField::Phone => FieldGroup::Contacts,
        }
    }
}

impl FromStr for OrderField {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFields {
    pub payment: PaymentMethod,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl OrderFields {
    /// Text value of a field; payment is rendered as its wire name.
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::Payment => self.payment.as_str(),
            OrderField::Address => &self.address,
            OrderField::Email => &self.email,
            OrderField::Phone => &self.phone,
        }
    }
}
