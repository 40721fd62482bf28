//! Event wiring between the stores, the backend and the view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use larek_commerce::{ShopEvent, ShopEventKind, Storefront};
use larek_data::StorefrontApi;
use larek_events::{BusEvent, HandlerError, HandlerResult, SubscriptionId};
use tracing::{debug, info, warn};

use crate::view::{
    BasketView, CardView, ContactsFormView, FormStatus, OrderFormView, PreviewView,
    StorefrontView,
};

/// Shown when the initial catalog fetch fails.
pub const CATALOG_LOAD_FAILED: &str = "Failed to load products. Try again later";

/// Every event kind the coordinator reacts to.
const HANDLED: [ShopEventKind; 20] = [
    ShopEventKind::CatalogChanged,
    ShopEventKind::PreviewChanged,
    ShopEventKind::BasketChanged,
    ShopEventKind::OrderErrorsChanged,
    ShopEventKind::ContactsErrorsChanged,
    ShopEventKind::CatalogLoadFailed,
    ShopEventKind::OrderPlaced,
    ShopEventKind::OrderFailed,
    ShopEventKind::ProductSelected,
    ShopEventKind::BasketToggle,
    ShopEventKind::BasketRemove,
    ShopEventKind::BasketOpen,
    ShopEventKind::OrderOpen,
    ShopEventKind::FieldChanged,
    ShopEventKind::PaymentChanged,
    ShopEventKind::OrderSubmitted,
    ShopEventKind::ContactsSubmitted,
    ShopEventKind::OrderFinished,
    ShopEventKind::ModalOpened,
    ShopEventKind::ModalClosed,
];

/// Resets the in-flight flag when a submission ends, even by unwinding.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Reacts to bus events: view intents become store calls, store
/// notifications become view updates, and checkout talks to the API.
///
/// Handlers hold a weak reference, so dropping the last `Rc<Coordinator>`
/// detaches it from the bus.
pub struct Coordinator {
    shop: Storefront,
    api: Rc<dyn StorefrontApi>,
    view: Rc<dyn StorefrontView>,
    submitting: Cell<bool>,
    page_locked: Cell<bool>,
    subscriptions: RefCell<Vec<SubscriptionId>>,
}

impl Coordinator {
    /// Create a coordinator and subscribe it to `shop`'s bus.
    pub fn install(
        shop: Storefront,
        api: Rc<dyn StorefrontApi>,
        view: Rc<dyn StorefrontView>,
    ) -> Rc<Self> {
        let coordinator = Rc::new(Self {
            shop,
            api,
            view,
            submitting: Cell::new(false),
            page_locked: Cell::new(false),
            subscriptions: RefCell::new(Vec::new()),
        });

        for kind in HANDLED {
            let weak = Rc::downgrade(&coordinator);
            let id = coordinator.shop.bus().subscribe(kind, move |event| {
                match weak.upgrade() {
                    Some(coordinator) => coordinator.handle(event),
                    None => Ok(()),
                }
            });
            coordinator.subscriptions.borrow_mut().push(id);
        }

        debug!(handlers = HANDLED.len(), "coordinator installed");
        coordinator
    }

    /// Remove every subscription this coordinator made.
    pub fn uninstall(&self) {
        let bus = self.shop.bus();
        for id in self.subscriptions.borrow_mut().drain(..) {
            bus.unsubscribe(id);
        }
    }

    pub fn shop(&self) -> &Storefront {
        &self.shop
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn is_page_locked(&self) -> bool {
        self.page_locked.get()
    }

    /// Fetch the catalog and publish it.
    ///
    /// On failure the catalog stays empty and the view is shown an error.
    /// Returns whether the catalog was loaded.
    pub fn load_catalog(&self) -> bool {
        match self.api.fetch_catalog() {
            Ok(items) => {
                info!(products = items.len(), "catalog loaded");
                self.shop.catalog().set_catalog(items);
                true
            }
            Err(e) => {
                warn!(error = %e, "catalog load failed");
                self.shop
                    .bus()
                    .emit(&ShopEvent::CatalogLoadFailed(CATALOG_LOAD_FAILED.to_string()));
                false
            }
        }
    }

    fn handle(&self, event: &ShopEvent) -> HandlerResult {
        debug!(event = event.kind().as_str(), "coordinator handling");

        match event {
            // Store notifications
            ShopEvent::CatalogChanged(items) => {
                let cards: Vec<CardView> = items.iter().map(CardView::from_product).collect();
                self.view.render_catalog(&cards);
            }
            ShopEvent::PreviewChanged(product) => {
                self.view
                    .render_preview(&PreviewView::new(product, self.shop.basket()));
            }
            ShopEvent::BasketChanged => {
                let basket = self.shop.basket();
                self.view.set_counter(basket.count());
                self.view.update_basket(&BasketView::from_basket(basket));
            }
            ShopEvent::OrderErrorsChanged(errors) => {
                self.view.update_order_status(&FormStatus::from_errors(errors));
            }
            ShopEvent::ContactsErrorsChanged(errors) => {
                self.view
                    .update_contacts_status(&FormStatus::from_errors(errors));
            }
            ShopEvent::OrderChanged => {}

            // Transport outcomes
            ShopEvent::CatalogLoadFailed(message) | ShopEvent::OrderFailed(message) => {
                self.view.show_error(message);
            }
            ShopEvent::OrderPlaced(result) => {
                self.view.render_success(result.total);
                self.shop.basket().clear();
                self.shop.order().clear();
            }

            // View intents
            ShopEvent::ProductSelected(id) => match self.shop.catalog().get_product(id) {
                Some(product) => self.shop.catalog().set_preview(Some(product)),
                None => debug!(product = %id, "selected product not in catalog"),
            },
            ShopEvent::BasketToggle(id) => {
                if self.shop.toggle_basket(id) == Some(true) {
                    self.view
                        .render_basket(&BasketView::from_basket(self.shop.basket()));
                }
            }
            ShopEvent::BasketRemove(id) => {
                self.shop.remove_from_basket(id);
            }
            ShopEvent::BasketOpen => {
                self.view
                    .render_basket(&BasketView::from_basket(self.shop.basket()));
            }
            ShopEvent::OrderOpen => {
                let fields = self.shop.order().fields();
                let valid = larek_commerce::checkout::validate_order_group(&fields).is_empty();
                self.view
                    .render_order_form(&OrderFormView::new(&fields, valid));
            }
            ShopEvent::FieldChanged { field, value } => {
                self.shop
                    .order()
                    .set_field(*field, value)
                    .map_err(|e| HandlerError::failed(e.to_string()))?;
            }
            ShopEvent::PaymentChanged(method) => {
                self.shop.order().set_payment(*method);
            }
            ShopEvent::OrderSubmitted => {
                let fields = self.shop.order().fields();
                let valid = larek_commerce::checkout::validate_contacts_group(&fields).is_empty();
                self.view
                    .render_contacts_form(&ContactsFormView::new(&fields, valid));
            }
            ShopEvent::ContactsSubmitted => self.submit_order(),
            ShopEvent::OrderFinished => self.view.close_modal(),
            ShopEvent::ModalOpened => self.set_locked(true),
            ShopEvent::ModalClosed => self.set_locked(false),
        }

        Ok(())
    }

    /// Send the current draft to the API.
    ///
    /// Ignored while another submission is in flight, or when the basket is
    /// empty or either form group is invalid. State is only cleared once the
    /// API has accepted the order.
    fn submit_order(&self) {
        if self.submitting.get() {
            debug!("order submission already in flight");
            return;
        }

        let order = self.shop.order();
        let order_valid = order.validate_order_group();
        let contacts_valid = order.validate_contacts_group();
        if !order_valid || !contacts_valid || self.shop.basket().is_empty() {
            debug!(order_valid, contacts_valid, "refusing to submit incomplete order");
            return;
        }

        let confirmation = self.shop.confirmation();
        let outcome = {
            self.submitting.set(true);
            let _in_flight = InFlight(&self.submitting);
            self.api.submit_order(&confirmation)
        };

        match outcome {
            Ok(result) => {
                info!(order = %result.id, total = %result.total, "order placed");
                self.shop.bus().emit(&ShopEvent::OrderPlaced(result));
            }
            Err(e) => {
                warn!(error = %e, "order submission failed");
                self.shop.bus().emit(&ShopEvent::OrderFailed(format!(
                    "Failed to place the order: {}",
                    e
                )));
            }
        }
    }

    fn set_locked(&self, locked: bool) {
        self.page_locked.set(locked);
        self.view.set_locked(locked);
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.uninstall();
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("shop", &self.shop)
            .field("submitting", &self.submitting.get())
            .field("page_locked", &self.page_locked.get())
            .field("subscriptions", &self.subscriptions.borrow().len())
            .finish()
    }
}
