//! Terminal rendering of the storefront views.

use std::cell::RefCell;

use larek_app::{
    BasketView, CardView, ContactsFormView, FormStatus, OrderFormView, PreviewView,
    StorefrontView,
};
use larek_core::Price;

use crate::output::{category_badge, short_id, Output};

/// What the last render calls reported, for commands to act on.
#[derive(Debug, Default)]
struct Rendered {
    order_status: Option<FormStatus>,
    contacts_status: Option<FormStatus>,
    success: Option<Price>,
    errors: Vec<String>,
}

/// [`StorefrontView`] that prints to the terminal.
pub struct TerminalView {
    output: Output,
    rendered: RefCell<Rendered>,
}

impl TerminalView {
    pub fn new(output: Output) -> Self {
        Self {
            output,
            rendered: RefCell::new(Rendered::default()),
        }
    }

    pub fn order_status(&self) -> Option<FormStatus> {
        self.rendered.borrow().order_status.clone()
    }

    pub fn contacts_status(&self) -> Option<FormStatus> {
        self.rendered.borrow().contacts_status.clone()
    }

    pub fn success(&self) -> Option<Price> {
        self.rendered.borrow().success
    }

    pub fn last_error(&self) -> Option<String> {
        self.rendered.borrow().errors.last().cloned()
    }
}

impl StorefrontView for TerminalView {
    fn render_catalog(&self, cards: &[CardView]) {
        self.output.header(&format!("Catalog ({} products)", cards.len()));
        for card in cards {
            let category = category_badge(&card.category, card.category_class);
            self.output.table_row(
                &[
                    short_id(card.id.as_str()),
                    card.price_label.as_str(),
                    card.title.as_str(),
                    category.as_str(),
                ],
                &[8, 16, 36, 16],
            );
        }
    }

    fn render_preview(&self, preview: &PreviewView) {
        let card = &preview.card;
        self.output.header(&card.title);
        self.output.kv("id", card.id.as_str());
        self.output
            .kv("category", &category_badge(&card.category, card.category_class));
        self.output.kv("price", &card.price_label);
        if !card.image.is_empty() {
            self.output.kv("image", &card.image);
        }
        if !card.description.is_empty() {
            self.output.kv("about", &card.description);
        }
        let button = if preview.button_enabled() {
            format!("[ {} ]", preview.button)
        } else {
            format!("[ {} ] (disabled)", preview.button)
        };
        self.output.kv("button", &button);
    }

    fn render_basket(&self, basket: &BasketView) {
        self.output.header("Basket");
        for line in &basket.lines {
            let index = line.index.to_string();
            self.output.table_row(
                &[index.as_str(), line.title.as_str(), line.price_label.as_str()],
                &[3, 36, 16],
            );
        }
        self.output.kv("total", &basket.total_label());
        if !basket.can_checkout {
            self.output.info("The basket is empty");
        }
    }

    fn update_basket(&self, basket: &BasketView) {
        self.output.debug(&format!(
            "basket now has {} line(s), {}",
            basket.lines.len(),
            basket.total_label()
        ));
    }

    fn set_counter(&self, count: usize) {
        self.output.debug(&format!("basket counter: {}", count));
    }

    fn render_order_form(&self, form: &OrderFormView) {
        self.output.header("Order: payment and delivery");
        self.output.kv("payment", form.payment.display_name());
        self.output.kv("address", &form.address);
    }

    fn render_contacts_form(&self, form: &ContactsFormView) {
        self.output.header("Order: contacts");
        self.output.kv("email", &form.email);
        self.output.kv("phone", &form.phone);
    }

    fn update_order_status(&self, status: &FormStatus) {
        self.output
            .debug(&format!("order form valid: {}", status.valid));
        self.rendered.borrow_mut().order_status = Some(status.clone());
    }

    fn update_contacts_status(&self, status: &FormStatus) {
        self.output
            .debug(&format!("contacts form valid: {}", status.valid));
        self.rendered.borrow_mut().contacts_status = Some(status.clone());
    }

    fn render_success(&self, total: Price) {
        self.output
            .success(&format!("Order placed, charged {}", Price::label(Some(total))));
        self.rendered.borrow_mut().success = Some(total);
    }

    fn show_error(&self, message: &str) {
        self.output.error(message);
        self.rendered.borrow_mut().errors.push(message.to_string());
    }

    fn set_locked(&self, locked: bool) {
        self.output.debug(&format!("page locked: {}", locked));
    }

    fn close_modal(&self) {
        self.output.debug("modal closed");
    }
}
