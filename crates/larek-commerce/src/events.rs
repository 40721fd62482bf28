//! Events carried on the storefront bus.
//!
//! One sum type covers both directions: notifications the stores emit after
//! a mutation, and intents the views emit on user interaction.

use larek_core::ProductId;
use larek_events::{BusEvent, EventBus};

use crate::catalog::Product;
use crate::checkout::{FormErrors, OrderField, OrderResult, PaymentMethod};

/// The bus type shared by every store.
pub type ShopBus = EventBus<ShopEvent>;

#[derive(Debug, Clone, PartialEq)]
pub enum ShopEvent {
    // =========================================================================
    // Store notifications
    // =========================================================================
    /// The catalog was replaced; carries the new list.
    CatalogChanged(Vec<Product>),
    /// A product was opened for inspection.
    PreviewChanged(Product),
    /// Basket membership may have changed.
    BasketChanged,
    /// Payment/address validation ran; carries the full error map for that group.
    OrderErrorsChanged(FormErrors),
    /// Email/phone validation ran; carries the full error map for that group.
    ContactsErrorsChanged(FormErrors),
    /// The order draft was reset.
    OrderChanged,

    // =========================================================================
    // Transport outcomes
    // =========================================================================
    /// Fetching the catalog failed; carries a user-facing message.
    CatalogLoadFailed(String),
    /// The backend accepted the order.
    OrderPlaced(OrderResult),
    /// Submitting the order failed; basket and draft are untouched.
    OrderFailed(String),

    // =========================================================================
    // View intents
    // =========================================================================
    /// A catalog card was clicked.
    ProductSelected(ProductId),
    /// The buy / remove button on a preview was clicked.
    BasketToggle(ProductId),
    /// The delete button on a basket row was clicked.
    BasketRemove(ProductId),
    BasketOpen,
    /// Checkout was started from the basket.
    OrderOpen,
    /// A text input in a checkout form changed.
    FieldChanged { field: OrderField, value: String },
    PaymentChanged(PaymentMethod),
    /// Step one (payment and address) was submitted.
    OrderSubmitted,
    /// Step two (email and phone) was submitted; places the order.
    ContactsSubmitted,
    /// The success screen was dismissed.
    OrderFinished,
    ModalOpened,
    ModalClosed,
}

/// Payload-free discriminant of [`ShopEvent`], used for subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShopEventKind {
    CatalogChanged,
    PreviewChanged,
    BasketChanged,
    OrderErrorsChanged,
    ContactsErrorsChanged,
    OrderChanged,
    CatalogLoadFailed,
    OrderPlaced,
    OrderFailed,
    ProductSelected,
    BasketToggle,
    BasketRemove,
    BasketOpen,
    OrderOpen,
    FieldChanged,
    PaymentChanged,
    OrderSubmitted,
    ContactsSubmitted,
    OrderFinished,
    ModalOpened,
    ModalClosed,
}

impl ShopEventKind {
    /// Stable dotted name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopEventKind::CatalogChanged => "catalog.changed",
            ShopEventKind::PreviewChanged => "preview.changed",
            ShopEventKind::BasketChanged => "basket.changed",
            ShopEventKind::OrderErrorsChanged => "order.errors_changed",
            ShopEventKind::ContactsErrorsChanged => "contacts.errors_changed",
            ShopEventKind::OrderChanged => "order.changed",
            ShopEventKind::CatalogLoadFailed => "catalog.load_failed",
            ShopEventKind::OrderPlaced => "order.placed",
            ShopEventKind::OrderFailed => "order.failed",
            ShopEventKind::ProductSelected => "catalog.select",
            ShopEventKind::BasketToggle => "basket.toggle",
            ShopEventKind::BasketRemove => "basket.remove",
            ShopEventKind::BasketOpen => "basket.open",
            ShopEventKind::OrderOpen => "order.open",
            ShopEventKind::FieldChanged => "input.change",
            ShopEventKind::PaymentChanged => "payment.change",
            ShopEventKind::OrderSubmitted => "order.submit",
            ShopEventKind::ContactsSubmitted => "contacts.submit",
            ShopEventKind::OrderFinished => "order.finished",
            ShopEventKind::ModalOpened => "modal.open",
            ShopEventKind::ModalClosed => "modal.close",
        }
    }
}

impl BusEvent for ShopEvent {
    type Kind = ShopEventKind;

    fn kind(&self) -> ShopEventKind {
        match self {
            ShopEvent::CatalogChanged(_) => ShopEventKind::CatalogChanged,
            ShopEvent::PreviewChanged(_) => ShopEventKind::PreviewChanged,
            ShopEvent::BasketChanged => ShopEventKind::BasketChanged,
            ShopEvent::OrderErrorsChanged(_) => ShopEventKind::OrderErrorsChanged,
            ShopEvent::ContactsErrorsChanged(_) => ShopEventKind::ContactsErrorsChanged,
            ShopEvent::OrderChanged => ShopEventKind::OrderChanged,
            ShopEvent::CatalogLoadFailed(_) => ShopEventKind::CatalogLoadFailed,
            ShopEvent::OrderPlaced(_) => ShopEventKind::OrderPlaced,
            ShopEvent::OrderFailed(_) => ShopEventKind::OrderFailed,
            ShopEvent::ProductSelected(_) => ShopEventKind::ProductSelected,
            ShopEvent::BasketToggle(_) => ShopEventKind::BasketToggle,
            ShopEvent::BasketRemove(_) => ShopEventKind::BasketRemove,
            ShopEvent::BasketOpen => ShopEventKind::BasketOpen,
            ShopEvent::OrderOpen => ShopEventKind::OrderOpen,
            ShopEvent::FieldChanged { .. } => ShopEventKind::FieldChanged,
            ShopEvent::PaymentChanged(_) => ShopEventKind::PaymentChanged,
            ShopEvent::OrderSubmitted => ShopEventKind::OrderSubmitted,
            ShopEvent::ContactsSubmitted => ShopEventKind::ContactsSubmitted,
            ShopEvent::OrderFinished => ShopEventKind::OrderFinished,
            ShopEvent::ModalOpened => ShopEventKind::ModalOpened,
            ShopEvent::ModalClosed => ShopEventKind::ModalClosed,
        }
    }
}
