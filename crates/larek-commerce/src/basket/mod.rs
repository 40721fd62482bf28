//! Basket module.
//!
//! Contains the basket store and the buy-button label derived from it.

mod label;
mod store;

pub use label::ButtonLabel;
pub use store::BasketStore;
