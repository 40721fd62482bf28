//! Application layer for the Larek storefront.
//!
//! The [`Coordinator`] subscribes to the storefront bus and translates
//! between three parties: the stores in
//! [`larek_commerce::Storefront`], the backend behind
//! [`StorefrontApi`](larek_data::StorefrontApi), and a rendering layer
//! implementing [`StorefrontView`].

pub mod coordinator;
pub mod error;
pub mod logging;
pub mod view;

pub use coordinator::{Coordinator, CATALOG_LOAD_FAILED};
pub use error::AppError;
pub use view::{
    BasketLine, BasketView, CardView, ContactsFormView, FormStatus, OrderFormView, PreviewView,
    StorefrontView,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::coordinator::Coordinator;
    pub use crate::view::{
        BasketLine, BasketView, CardView, ContactsFormView, FormStatus, OrderFormView,
        PreviewView, StorefrontView,
    };
    pub use larek_commerce::prelude::*;
    pub use larek_data::{FetchError, StorefrontApi};
}
