//! Shared building blocks for the Larek storefront.
//!
//! - `ids` - newtype identifiers for products and placed orders
//! - `price` - integer prices in synapses, the storefront's only currency
//! - `config` - API endpoints and logging settings, layered file + env

pub mod config;
pub mod error;
pub mod ids;
pub mod price;

pub use config::{ApiConfig, LogConfig, LogFormat, StorefrontConfig};
pub use error::ConfigError;
pub use ids::{OrderId, ProductId};
pub use price::Price;
