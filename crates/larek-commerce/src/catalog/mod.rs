//! Product catalog module.
//!
//! Contains the product type and the store holding the fetched catalog.

mod product;
mod store;

pub use product::{category_class, Product, CATEGORY_CLASSES};
pub use store::CatalogStore;
