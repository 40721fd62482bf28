//! Storefront composition root.

use std::rc::Rc;

use larek_core::ProductId;
use tracing::debug;

use crate::basket::BasketStore;
use crate::catalog::CatalogStore;
use crate::checkout::{OrderConfirmation, OrderDraft};
use crate::events::ShopBus;

/// One bus and the three stores that publish on it.
///
/// Cloning is cheap and shares the same stores.
#[derive(Clone)]
pub struct Storefront {
    bus: Rc<ShopBus>,
    catalog: Rc<CatalogStore>,
    basket: Rc<BasketStore>,
    order: Rc<OrderDraft>,
}

impl Storefront {
    pub fn new() -> Self {
        Self::with_bus(Rc::new(ShopBus::new()))
    }

    /// Build the stores around an existing bus.
    pub fn with_bus(bus: Rc<ShopBus>) -> Self {
        Self {
            catalog: Rc::new(CatalogStore::new(Rc::clone(&bus))),
            basket: Rc::new(BasketStore::new(Rc::clone(&bus))),
            order: Rc::new(OrderDraft::new(Rc::clone(&bus))),
            bus,
        }
    }

    pub fn bus(&self) -> &Rc<ShopBus> {
        &self.bus
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn basket(&self) -> &BasketStore {
        &self.basket
    }

    pub fn order(&self) -> &OrderDraft {
        &self.order
    }

    /// Toggle a catalog product in the basket.
    ///
    /// Returns whether it is in the basket afterwards, or `None` if the id
    /// is not in the catalog.
    pub fn toggle_basket(&self, id: &ProductId) -> Option<bool> {
        let Some(product) = self.catalog.get_product(id) else {
            debug!(product = %id, "toggle for unknown product ignored");
            return None;
        };
        Some(self.basket.toggle(&product))
    }

    pub fn remove_from_basket(&self, id: &ProductId) -> bool {
        self.basket.remove(id)
    }

    /// The order payload for the current draft and basket.
    pub fn confirmation(&self) -> OrderConfirmation {
        self.order.snapshot(&self.basket)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("catalog", &self.catalog.len())
            .field("basket", &self.basket.count())
            .field("order", &self.order.fields())
            .finish()
    }
}
