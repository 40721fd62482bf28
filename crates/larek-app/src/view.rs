//! View models and the rendering boundary.
//!
//! The coordinator turns store state into these plain structs and hands
//! them to a [`StorefrontView`]. Views never read the stores themselves.

use larek_commerce::basket::{BasketStore, ButtonLabel};
use larek_commerce::catalog::Product;
use larek_commerce::checkout::{FormErrors, OrderFields, PaymentMethod};
use larek_core::{Price, ProductId};

/// A product card as shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub category_class: Option<&'static str>,
    pub image: String,
    pub description: String,
    pub price_label: String,
}

impl CardView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            category_class: product.category_class(),
            image: product.image.clone(),
            description: product.description.clone(),
            price_label: product.price_label(),
        }
    }
}

/// A card opened for inspection, with its buy button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub card: CardView,
    pub button: ButtonLabel,
}

impl PreviewView {
    pub fn new(product: &Product, basket: &BasketStore) -> Self {
        Self {
            card: CardView::from_product(product),
            button: basket.button_label(product),
        }
    }

    pub fn button_enabled(&self) -> bool {
        self.button.is_enabled()
    }
}

/// One row of the basket list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketLine {
    /// 1-based position.
    pub index: usize,
    pub id: ProductId,
    pub title: String,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketView {
    pub lines: Vec<BasketLine>,
    pub total: Price,
    /// Checkout is only offered for a non-empty basket.
    pub can_checkout: bool,
}

impl BasketView {
    pub fn from_basket(basket: &BasketStore) -> Self {
        let lines: Vec<BasketLine> = basket
            .items()
            .iter()
            .enumerate()
            .map(|(i, product)| BasketLine {
                index: i + 1,
                id: product.id.clone(),
                title: product.title.clone(),
                price_label: product.price_label(),
            })
            .collect();

        Self {
            can_checkout: !lines.is_empty(),
            lines,
            total: basket.total(),
        }
    }

    pub fn total_label(&self) -> String {
        Price::label(Some(self.total))
    }
}

/// Step one of checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFormView {
    pub payment: PaymentMethod,
    pub address: String,
    pub valid: bool,
}

impl OrderFormView {
    pub fn new(fields: &OrderFields, valid: bool) -> Self {
        Self {
            payment: fields.payment,
            address: fields.address.clone(),
            valid,
        }
    }
}

/// Step two of checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsFormView {
    pub email: String,
    pub phone: String,
    pub valid: bool,
}

impl ContactsFormView {
    pub fn new(fields: &OrderFields, valid: bool) -> Self {
        Self {
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            valid,
        }
    }
}

/// Submit-button state and the single error line under a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub valid: bool,
    pub errors: String,
}

impl FormStatus {
    pub fn from_errors(errors: &FormErrors) -> Self {
        Self {
            valid: errors.is_empty(),
            errors: errors.summary(),
        }
    }
}

/// The rendering layer.
///
/// Every method takes `&self`: views are shared with the coordinator and
/// may be called while an event is being dispatched, so implementations
/// keep their own state behind interior mutability.
pub trait StorefrontView {
    fn render_catalog(&self, cards: &[CardView]);

    /// Open the preview of one product.
    fn render_preview(&self, preview: &PreviewView);

    /// Open the basket.
    fn render_basket(&self, basket: &BasketView);

    /// Refresh the basket contents without opening it.
    fn update_basket(&self, basket: &BasketView);

    fn set_counter(&self, count: usize);

    fn render_order_form(&self, form: &OrderFormView);

    fn render_contacts_form(&self, form: &ContactsFormView);

    fn update_order_status(&self, status: &FormStatus);

    fn update_contacts_status(&self, status: &FormStatus);

    /// Show the order confirmation with the charged total.
    fn render_success(&self, total: Price);

    fn show_error(&self, message: &str);

    /// Lock or unlock page scrolling behind an open modal.
    fn set_locked(&self, locked: bool);

    fn close_modal(&self);
}
