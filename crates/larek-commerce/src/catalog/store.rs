//! Catalog store.

use std::cell::RefCell;
use std::rc::Rc;

use larek_core::ProductId;
use tracing::debug;

use crate::catalog::Product;
use crate::events::{ShopBus, ShopEvent};

/// Holds the fetched product list and the product currently previewed.
pub struct CatalogStore {
    bus: Rc<ShopBus>,
    items: RefCell<Vec<Product>>,
    preview: RefCell<Option<ProductId>>,
}

impl CatalogStore {
    pub fn new(bus: Rc<ShopBus>) -> Self {
        Self {
            bus,
            items: RefCell::new(Vec::new()),
            preview: RefCell::new(None),
        }
    }

    /// Replace the catalog wholesale and emit `CatalogChanged`.
    ///
    /// Products missing from `items` are forgotten; there is no merge.
    pub fn set_catalog(&self, items: Vec<Product>) {
        debug!(products = items.len(), "catalog replaced");
        *self.items.borrow_mut() = items.clone();
        self.bus.emit(&ShopEvent::CatalogChanged(items));
    }

    /// Look up a product. Absence is not an error; callers ignore it.
    pub fn get_product(&self, id: &ProductId) -> Option<Product> {
        self.items.borrow().iter().find(|p| &p.id == id).cloned()
    }

    /// Record the product being inspected.
    ///
    /// Emits `PreviewChanged` only for `Some`; closing a preview is silent.
    pub fn set_preview(&self, product: Option<Product>) {
        *self.preview.borrow_mut() = product.as_ref().map(|p| p.id.clone());
        if let Some(product) = product {
            debug!(product = %product.id, "preview opened");
            self.bus.emit(&ShopEvent::PreviewChanged(product));
        }
    }

    pub fn preview(&self) -> Option<ProductId> {
        self.preview.borrow().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}
