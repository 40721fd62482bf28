//! Coordinator behavior driven through the bus, with an in-memory API and
//! a view that records every call.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use larek_app::prelude::*;
use larek_app::CATALOG_LOAD_FAILED;

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Default)]
struct FakeApi {
    catalog: Vec<Product>,
    catalog_down: bool,
    order_down: Cell<bool>,
    submitted: RefCell<Vec<OrderConfirmation>>,
    on_submit: RefCell<Option<Box<dyn Fn()>>>,
}

impl FakeApi {
    fn with_catalog(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }
}

impl StorefrontApi for FakeApi {
    fn fetch_catalog(&self) -> Result<Vec<Product>, FetchError> {
        if self.catalog_down {
            return Err(FetchError::Timeout);
        }
        Ok(self.catalog.clone())
    }

    fn fetch_product(&self, id: &ProductId) -> Result<Product, FetchError> {
        self.catalog
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::HttpError {
                status: 404,
                message: "Not Found".to_string(),
            })
    }

    fn submit_order(&self, order: &OrderConfirmation) -> Result<OrderResult, FetchError> {
        self.submitted.borrow_mut().push(order.clone());
        if let Some(hook) = self.on_submit.borrow().as_ref() {
            hook();
        }
        if self.order_down.get() {
            return Err(FetchError::HttpError {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(OrderResult {
            id: OrderId::new("ord-1"),
            total: order.total,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Catalog(Vec<CardView>),
    Preview(PreviewView),
    OpenBasket(BasketView),
    UpdateBasket(BasketView),
    Counter(usize),
    OrderForm(OrderFormView),
    ContactsForm(ContactsFormView),
    OrderStatus(FormStatus),
    ContactsStatus(FormStatus),
    Success(Price),
    Error(String),
    Locked(bool),
    Close,
}

#[derive(Default)]
struct RecordingView {
    calls: RefCell<Vec<Call>>,
}

impl RecordingView {
    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl StorefrontView for RecordingView {
    fn render_catalog(&self, cards: &[CardView]) {
        self.push(Call::Catalog(cards.to_vec()));
    }
    fn render_preview(&self, preview: &PreviewView) {
        self.push(Call::Preview(preview.clone()));
    }
    fn render_basket(&self, basket: &BasketView) {
        self.push(Call::OpenBasket(basket.clone()));
    }
    fn update_basket(&self, basket: &BasketView) {
        self.push(Call::UpdateBasket(basket.clone()));
    }
    fn set_counter(&self, count: usize) {
        self.push(Call::Counter(count));
    }
    fn render_order_form(&self, form: &OrderFormView) {
        self.push(Call::OrderForm(form.clone()));
    }
    fn render_contacts_form(&self, form: &ContactsFormView) {
        self.push(Call::ContactsForm(form.clone()));
    }
    fn update_order_status(&self, status: &FormStatus) {
        self.push(Call::OrderStatus(status.clone()));
    }
    fn update_contacts_status(&self, status: &FormStatus) {
        self.push(Call::ContactsStatus(status.clone()));
    }
    fn render_success(&self, total: Price) {
        self.push(Call::Success(total));
    }
    fn show_error(&self, message: &str) {
        self.push(Call::Error(message.to_string()));
    }
    fn set_locked(&self, locked: bool) {
        self.push(Call::Locked(locked));
    }
    fn close_modal(&self) {
        self.push(Call::Close);
    }
}

// =============================================================================
// Fixtures
// =============================================================================

fn catalog() -> Vec<Product> {
    vec![
        Product::new("a", "Pill", "другое", Some(Price::new(100))),
        Product::new("b", "Shield", "хард-скил", Some(Price::new(250))),
        Product::new("c", "Secret", "кнопка", None),
    ]
}

struct Harness {
    shop: Storefront,
    api: Rc<FakeApi>,
    view: Rc<RecordingView>,
    coordinator: Rc<Coordinator>,
}

impl Harness {
    fn with_api(api: FakeApi) -> Self {
        let shop = Storefront::new();
        let api = Rc::new(api);
        let view = Rc::new(RecordingView::default());
        let coordinator = Coordinator::install(shop.clone(), api.clone(), view.clone());
        Self {
            shop,
            api,
            view,
            coordinator,
        }
    }

    fn loaded() -> Self {
        let harness = Self::with_api(FakeApi::with_catalog(catalog()));
        assert!(harness.coordinator.load_catalog());
        harness.view.take();
        harness
    }

    fn emit(&self, event: ShopEvent) {
        self.shop.bus().emit(&event);
    }

    fn field(&self, field: OrderField, value: &str) {
        self.emit(ShopEvent::FieldChanged {
            field,
            value: value.to_string(),
        });
    }

    fn fill_valid_draft(&self) {
        self.emit(ShopEvent::PaymentChanged(PaymentMethod::Card));
        self.field(OrderField::Address, "Main St 1");
        self.field(OrderField::Email, "x@y.com");
        self.field(OrderField::Phone, "+79123456789");
    }
}

fn id(value: &str) -> ProductId {
    ProductId::new(value)
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_load_catalog_renders_cards() {
    let harness = Harness::with_api(FakeApi::with_catalog(catalog()));
    assert!(harness.coordinator.load_catalog());

    let calls = harness.view.take();
    let [Call::Catalog(cards)] = calls.as_slice() else {
        panic!("unexpected calls: {calls:?}");
    };
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].price_label, "100 synapses");
    assert_eq!(cards[2].price_label, "Priceless");
    assert_eq!(harness.shop.catalog().len(), 3);
}

#[test]
fn test_load_catalog_failure_shows_error() {
    let harness = Harness::with_api(FakeApi {
        catalog_down: true,
        ..FakeApi::default()
    });

    assert!(!harness.coordinator.load_catalog());
    assert!(harness.shop.catalog().is_empty());
    assert_eq!(
        harness.view.take(),
        vec![Call::Error(CATALOG_LOAD_FAILED.to_string())]
    );
}

#[test]
fn test_select_product_opens_preview() {
    let harness = Harness::loaded();
    harness.emit(ShopEvent::ProductSelected(id("a")));

    let calls = harness.view.take();
    let [Call::Preview(preview)] = calls.as_slice() else {
        panic!("unexpected calls: {calls:?}");
    };
    assert_eq!(preview.card.id, id("a"));
    assert_eq!(preview.button, ButtonLabel::Buy);
    assert_eq!(harness.shop.catalog().preview(), Some(id("a")));
}

#[test]
fn test_select_unknown_product_is_ignored() {
    let harness = Harness::loaded();
    harness.emit(ShopEvent::ProductSelected(id("zzz")));

    assert!(harness.view.take().is_empty());
    assert!(harness.shop.bus().take_failures().is_empty());
}

// =============================================================================
// Basket
// =============================================================================

#[test]
fn test_toggle_adds_then_opens_basket() {
    let harness = Harness::loaded();
    harness.emit(ShopEvent::BasketToggle(id("a")));

    let calls = harness.view.take();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], Call::Counter(1));
    assert!(matches!(&calls[1], Call::UpdateBasket(b) if b.lines.len() == 1));
    let Call::OpenBasket(basket) = &calls[2] else {
        panic!("basket not opened: {calls:?}");
    };
    assert_eq!(basket.total, Price::new(100));
    assert!(basket.can_checkout);
}

#[test]
fn test_toggle_removal_does_not_open_basket() {
    let harness = Harness::loaded();
    harness.emit(ShopEvent::BasketToggle(id("a")));
    harness.view.take();

    harness.emit(ShopEvent::BasketToggle(id("a")));
    let calls = harness.view.take();
    assert_eq!(calls[0], Call::Counter(0));
    assert!(!calls.iter().any(|c| matches!(c, Call::OpenBasket(_))));
    assert!(harness.shop.basket().is_empty());
}

#[test]
fn test_unpriced_product_never_enters_basket() {
    let harness = Harness::loaded();
    harness.emit(ShopEvent::BasketToggle(id("c")));

    assert!(harness.view.take().is_empty());
    assert!(harness.shop.basket().is_empty());
}

#[test]
fn test_remove_reindexes_basket_lines() {
    let harness = Harness::loaded();
    harness.emit(ShopEvent::BasketToggle(id("a")));
    harness.emit(ShopEvent::BasketToggle(id("b")));
    harness.view.take();

    harness.emit(ShopEvent::BasketRemove(id("a")));
    let calls = harness.view.take();
    let Some(Call::UpdateBasket(basket)) = calls.last() else {
        panic!("basket not refreshed: {calls:?}");
    };
    assert_eq!(basket.lines.len(), 1);
    assert_eq!(basket.lines[0].id, id("b"));
    assert_eq!(basket.lines[0].index, 1);
    assert_eq!(basket.total, Price::new(250));
}

// =============================================================================
// Checkout
// =============================================================================

#[test]
fn test_order_open_renders_current_draft() {
    let harness = Harness::loaded();
    harness.emit(ShopEvent::OrderOpen);
    assert_eq!(
        harness.view.take(),
        vec![Call::OrderForm(OrderFormView {
            payment: PaymentMethod::Unset,
            address: String::new(),
            valid: false,
        })]
    );

    harness.emit(ShopEvent::PaymentChanged(PaymentMethod::Cash));
    harness.field(OrderField::Address, "Main St 1");
    harness.view.take();

    harness.emit(ShopEvent::OrderOpen);
    let calls = harness.view.take();
    assert!(matches!(&calls[0], Call::OrderForm(form) if form.valid));
}

#[test]
fn test_field_edits_update_only_their_form() {
    let harness = Harness::loaded();
    harness.field(OrderField::Email, "abc");

    assert_eq!(
        harness.view.take(),
        vec![Call::ContactsStatus(FormStatus {
            valid: false,
            errors: "Invalid email and Enter a phone number".to_string(),
        })]
    );

    harness.field(OrderField::Address, "Main St 1");
    assert_eq!(
        harness.view.take(),
        vec![Call::OrderStatus(FormStatus {
            valid: false,
            errors: "Select a payment method".to_string(),
        })]
    );
    assert_eq!(
        harness.shop.order().contacts_errors().get(OrderField::Email),
        Some("Invalid email")
    );
}

#[test]
fn test_bad_payment_value_is_a_handler_failure() {
    let harness = Harness::loaded();
    harness.field(OrderField::Payment, "barter");

    let failures = harness.shop.bus().take_failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].error.to_string().contains("barter"));
    assert_eq!(harness.shop.order().fields().payment, PaymentMethod::Unset);
}

#[test]
fn test_order_submitted_opens_contacts_form() {
    let harness = Harness::loaded();
    harness.field(OrderField::Email, "x@y.com");
    harness.view.take();

    harness.emit(ShopEvent::OrderSubmitted);
    assert_eq!(
        harness.view.take(),
        vec![Call::ContactsForm(ContactsFormView {
            email: "x@y.com".to_string(),
            phone: String::new(),
            valid: false,
        })]
    );
}

#[test]
fn test_successful_checkout_clears_state() {
    let harness = Harness::loaded();
    harness.emit(ShopEvent::BasketToggle(id("a")));
    harness.fill_valid_draft();
    harness.view.take();

    harness.emit(ShopEvent::ContactsSubmitted);

    let submitted = harness.api.submitted.borrow();
    assert_eq!(submitted.len(), 1);
    assert_eq!(
        submitted[0],
        OrderConfirmation {
            items: vec![id("a")],
            payment: PaymentMethod::Card,
            address: "Main St 1".into(),
            email: "x@y.com".into(),
            phone: "+79123456789".into(),
            total: Price::new(100),
        }
    );

    let calls = harness.view.take();
    assert!(calls.contains(&Call::Success(Price::new(100))));
    assert!(calls.contains(&Call::Counter(0)));
    assert!(harness.shop.basket().is_empty());
    assert_eq!(harness.shop.order().fields(), OrderFields::default());
    assert!(!harness.coordinator.is_submitting());
}

#[test]
fn test_failed_checkout_keeps_state_for_retry() {
    let harness = Harness::loaded();
    harness.api.order_down.set(true);
    harness.emit(ShopEvent::BasketToggle(id("a")));
    harness.fill_valid_draft();
    harness.view.take();

    harness.emit(ShopEvent::ContactsSubmitted);

    let calls = harness.view.take();
    assert!(calls
        .iter()
        .any(|c| matches!(c, Call::Error(m) if m.contains("Internal Server Error"))));
    assert!(!calls.iter().any(|c| matches!(c, Call::Success(_))));
    assert_eq!(harness.shop.basket().count(), 1);
    assert_eq!(harness.shop.order().fields().address, "Main St 1");
    assert!(!harness.coordinator.is_submitting());

    harness.api.order_down.set(false);
    harness.emit(ShopEvent::ContactsSubmitted);
    assert_eq!(harness.api.submitted.borrow().len(), 2);
    assert!(harness.shop.basket().is_empty());
}

#[test]
fn test_duplicate_submission_is_ignored() {
    let harness = Harness::loaded();
    harness.emit(ShopEvent::BasketToggle(id("a")));
    harness.fill_valid_draft();

    // A second submit arrives while the first request is still in flight.
    let bus = Rc::clone(harness.shop.bus());
    *harness.api.on_submit.borrow_mut() = Some(Box::new(move || {
        bus.emit(&ShopEvent::ContactsSubmitted);
    }));

    harness.emit(ShopEvent::ContactsSubmitted);
    assert_eq!(harness.api.submitted.borrow().len(), 1);
    assert!(harness.shop.basket().is_empty());
}

#[test]
fn test_incomplete_order_is_not_submitted() {
    let harness = Harness::loaded();
    harness.emit(ShopEvent::BasketToggle(id("a")));
    harness.emit(ShopEvent::PaymentChanged(PaymentMethod::Card));
    harness.field(OrderField::Address, "Main St 1");
    harness.field(OrderField::Email, "x@y.com");
    harness.view.take();

    harness.emit(ShopEvent::ContactsSubmitted);

    assert!(harness.api.submitted.borrow().is_empty());
    let calls = harness.view.take();
    assert!(calls.contains(&Call::ContactsStatus(FormStatus {
        valid: false,
        errors: "Enter a phone number".to_string(),
    })));
}

#[test]
fn test_empty_basket_is_not_submitted() {
    let harness = Harness::loaded();
    harness.fill_valid_draft();

    harness.emit(ShopEvent::ContactsSubmitted);
    assert!(harness.api.submitted.borrow().is_empty());
}

// =============================================================================
// Modal lifecycle
// =============================================================================

#[test]
fn test_modal_lifecycle_locks_page() {
    let harness = Harness::loaded();

    harness.emit(ShopEvent::ModalOpened);
    assert!(harness.coordinator.is_page_locked());
    harness.emit(ShopEvent::ModalClosed);
    assert!(!harness.coordinator.is_page_locked());

    harness.emit(ShopEvent::OrderFinished);
    assert_eq!(
        harness.view.take(),
        vec![Call::Locked(true), Call::Locked(false), Call::Close]
    );
}

#[test]
fn test_dropping_coordinator_detaches_it() {
    let harness = Harness::loaded();
    let Harness {
        shop,
        view,
        coordinator,
        ..
    } = harness;
    assert_eq!(shop.bus().handler_count(ShopEventKind::BasketOpen), 1);

    drop(coordinator);
    assert_eq!(shop.bus().handler_count(ShopEventKind::BasketOpen), 0);

    shop.bus().emit(&ShopEvent::BasketOpen);
    assert!(view.take().is_empty());
}
