//! Order payload and confirmation.

use larek_core::{OrderId, Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::checkout::PaymentMethod;

/// The finalized payload sent to the order API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub items: Vec<ProductId>,
    pub payment: PaymentMethod,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub total: Price,
}

/// What the order API returns for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub id: OrderId,
    pub total: Price,
}
