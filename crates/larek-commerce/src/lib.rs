//! Client-side storefront state for Larek.
//!
//! Three stores share one [`EventBus`](larek_events::EventBus) and announce
//! every mutation on it:
//!
//! - **Catalog**: the fetched product list and the product being previewed
//! - **Basket**: products selected for purchase, totals and display order
//! - **Checkout**: the two-step order draft and its per-group validation
//!
//! [`Storefront`] is the composition root that wires them together.
//!
//! # Example
//!
//! ```rust
//! use larek_commerce::prelude::*;
//!
//! let shop = Storefront::new();
//! shop.catalog().set_catalog(vec![Product::new("a", "Pill", "другое", Some(Price::new(100)))]);
//!
//! assert_eq!(shop.toggle_basket(&ProductId::new("a")), Some(true));
//! assert_eq!(shop.basket().total(), Price::new(100));
//! ```

pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod events;
pub mod state;

pub use error::CommerceError;
pub use events::{ShopBus, ShopEvent, ShopEventKind};
pub use state::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::events::{ShopBus, ShopEvent, ShopEventKind};
    pub use crate::state::Storefront;
    pub use larek_core::{OrderId, Price, ProductId};

    // Catalog
    pub use crate::catalog::{CatalogStore, Product};

    // Basket
    pub use crate::basket::{BasketStore, ButtonLabel};

    // Checkout
    pub use crate::checkout::{
        FieldGroup, FormErrors, OrderConfirmation, OrderDraft, OrderField, OrderFields,
        OrderResult, PaymentMethod,
    };
}
