//! Basket store.

use std::cell::RefCell;
use std::rc::Rc;

use larek_core::{Price, ProductId};
use tracing::debug;

use crate::basket::ButtonLabel;
use crate::catalog::Product;
use crate::events::{ShopBus, ShopEvent};

/// Products selected for purchase.
///
/// Insertion order is display order and ids are unique. Every product
/// should come from the catalog; [`Storefront`](crate::Storefront) enforces
/// that by looking ids up before inserting.
pub struct BasketStore {
    bus: Rc<ShopBus>,
    items: RefCell<Vec<Product>>,
}

impl BasketStore {
    pub fn new(bus: Rc<ShopBus>) -> Self {
        Self {
            bus,
            items: RefCell::new(Vec::new()),
        }
    }

    /// Append `product` unless it is already present, then emit `BasketChanged`.
    ///
    /// Products that are not for sale are refused without an event.
    /// Returns true if the product was appended.
    pub fn add(&self, product: &Product) -> bool {
        if !product.is_for_sale() {
            debug!(product = %product.id, "refusing product without a price");
            return false;
        }

        let appended = {
            let mut items = self.items.borrow_mut();
            if items.iter().any(|p| p.id == product.id) {
                false
            } else {
                items.push(product.clone());
                true
            }
        };

        debug!(product = %product.id, appended, "basket add");
        self.bus.emit(&ShopEvent::BasketChanged);
        appended
    }

    /// Remove the entry with `id` if present, then emit `BasketChanged`.
    ///
    /// Returns true if something was removed.
    pub fn remove(&self, id: &ProductId) -> bool {
        let removed = {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|p| &p.id != id);
            items.len() < before
        };

        debug!(product = %id, removed, "basket remove");
        self.bus.emit(&ShopEvent::BasketChanged);
        removed
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns whether the product is in the basket afterwards.
    pub fn toggle(&self, product: &Product) -> bool {
        if self.contains(&product.id) {
            self.remove(&product.id);
            false
        } else {
            self.add(product)
        }
    }

    /// Sum of prices; products without a price count as zero.
    pub fn total(&self) -> Price {
        Price::sum_optional(self.items.borrow().iter().map(|p| &p.price))
    }

    pub fn count(&self) -> usize {
        self.items.borrow().len()
    }

    /// 1-based position in display order, `None` if absent.
    pub fn index_of(&self, id: &ProductId) -> Option<usize> {
        self.items
            .borrow()
            .iter()
            .position(|p| &p.id == id)
            .map(|i| i + 1)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.borrow().iter().any(|p| &p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn items(&self) -> Vec<Product> {
        self.items.borrow().clone()
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.items.borrow().iter().map(|p| p.id.clone()).collect()
    }

    /// Empty the basket and emit `BasketChanged`.
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
        debug!("basket cleared");
        self.bus.emit(&ShopEvent::BasketChanged);
    }

    /// Label for the buy button of `product` given current membership.
    pub fn button_label(&self, product: &Product) -> ButtonLabel {
        if !product.is_for_sale() {
            ButtonLabel::NotForSale
        } else if self.contains(&product.id) {
            ButtonLabel::Remove
        } else {
            ButtonLabel::Buy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ShopEventKind;
    use std::cell::Cell;

    fn product(id: &str, price: Option<i64>) -> Product {
        Product::new(id, format!("Product {}", id), "другое", price.map(Price::new))
    }

    fn basket() -> (Rc<ShopBus>, BasketStore, Rc<Cell<usize>>) {
        let bus = Rc::new(ShopBus::new());
        let changes = Rc::new(Cell::new(0));
        let c = Rc::clone(&changes);
        bus.subscribe(ShopEventKind::BasketChanged, move |_| {
            c.set(c.get() + 1);
            Ok(())
        });
        let store = BasketStore::new(Rc::clone(&bus));
        (bus, store, changes)
    }

    #[test]
    fn test_toggle_priced_and_unpriced() {
        let (_bus, basket, _) = basket();
        let a = product("A", Some(100));
        let b = product("B", None);

        assert!(basket.toggle(&a));
        assert_eq!(basket.ids(), vec![ProductId::new("A")]);
        assert_eq!(basket.count(), 1);
        assert_eq!(basket.total(), Price::new(100));

        assert!(!basket.toggle(&b));
        assert_eq!(basket.count(), 1);
        assert!(!basket.contains(&b.id));

        assert_eq!(basket.index_of(&a.id), Some(1));
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let (_bus, basket, _) = basket();
        let a = product("A", Some(100));
        let c = product("C", Some(40));
        basket.add(&c);

        for _ in 0..3 {
            let was_present = basket.contains(&a.id);
            basket.toggle(&a);
            basket.toggle(&a);
            assert_eq!(basket.contains(&a.id), was_present);
        }
        assert!(basket.toggle(&a));
        assert!(!basket.toggle(&a));
        assert_eq!(basket.ids(), vec![ProductId::new("C")]);
    }

    #[test]
    fn test_unpriced_product_never_enters() {
        let (_bus, basket, changes) = basket();
        let b = product("B", None);

        assert!(!basket.add(&b));
        assert!(!basket.toggle(&b));
        assert!(basket.is_empty());
        assert_eq!(changes.get(), 0);
        assert_eq!(basket.button_label(&b), ButtonLabel::NotForSale);
    }

    #[test]
    fn test_duplicate_add_is_idempotent() {
        let (_bus, basket, changes) = basket();
        let a = product("A", Some(100));

        assert!(basket.add(&a));
        assert!(!basket.add(&a));
        assert_eq!(basket.count(), 1);
        assert_eq!(changes.get(), 2);
    }

    #[test]
    fn test_remove_absent_is_noop_but_notifies() {
        let (_bus, basket, changes) = basket();
        assert!(!basket.remove(&ProductId::new("ghost")));
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn test_total_and_index_follow_order() {
        let (_bus, basket, _) = basket();
        assert_eq!(basket.total(), Price::ZERO);

        let a = product("A", Some(100));
        let b = product("B", Some(2500));
        let c = product("C", Some(0));
        basket.add(&a);
        basket.add(&b);
        basket.add(&c);
        assert_eq!(basket.total(), Price::new(2600));
        assert_eq!(basket.index_of(&c.id), Some(3));

        basket.remove(&a.id);
        assert_eq!(basket.index_of(&b.id), Some(1));
        assert_eq!(basket.index_of(&c.id), Some(2));
        assert_eq!(basket.index_of(&a.id), None);
        assert_eq!(basket.total(), Price::new(2500));
    }

    #[test]
    fn test_button_label() {
        let (_bus, basket, _) = basket();
        let a = product("A", Some(100));

        assert_eq!(basket.button_label(&a), ButtonLabel::Buy);
        basket.add(&a);
        assert_eq!(basket.button_label(&a), ButtonLabel::Remove);
        assert_eq!(basket.button_label(&a).as_str(), "Remove from basket");
        assert!(!ButtonLabel::NotForSale.is_enabled());
    }

    #[test]
    fn test_clear() {
        let (_bus, basket, changes) = basket();
        basket.add(&product("A", Some(1)));
        basket.clear();
        assert!(basket.is_empty());
        assert_eq!(basket.total(), Price::ZERO);
        assert_eq!(changes.get(), 2);
    }
}
