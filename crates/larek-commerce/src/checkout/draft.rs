//! Order draft store.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::basket::BasketStore;
use crate::checkout::validation::{validate_contacts_group, validate_order_group};
use crate::checkout::{
    FieldGroup, FormErrors, OrderConfirmation, OrderField, OrderFields, PaymentMethod,
};
use crate::error::CommerceError;
use crate::events::{ShopBus, ShopEvent};

/// The two-step checkout form.
///
/// The payment/address group and the email/phone group are validated
/// independently. Editing a field only re-validates its own group, so
/// errors recorded for the other group are left as they were.
pub struct OrderDraft {
    bus: Rc<ShopBus>,
    fields: RefCell<OrderFields>,
    order_errors: RefCell<FormErrors>,
    contacts_errors: RefCell<FormErrors>,
}

impl OrderDraft {
    pub fn new(bus: Rc<ShopBus>) -> Self {
        Self {
            bus,
            fields: RefCell::new(OrderFields::default()),
            order_errors: RefCell::new(FormErrors::new()),
            contacts_errors: RefCell::new(FormErrors::new()),
        }
    }

    /// Write one field, then validate the group it belongs to.
    ///
    /// The payment value must be `""`, `"card"` or `"cash"`; anything else
    /// is rejected and leaves the draft untouched.
    pub fn set_field(&self, field: OrderField, value: &str) -> Result<(), CommerceError> {
        {
            let mut fields = self.fields.borrow_mut();
            match field {
                OrderField::Payment => fields.payment = value.parse()?,
                OrderField::Address => fields.address = value.to_string(),
                OrderField::Email => fields.email = value.to_string(),
                OrderField::Phone => fields.phone = value.to_string(),
            }
        }

        debug!(%field, "order field set");
        self.validate_group(field.group());
        Ok(())
    }

    /// Choose the payment method, then re-validate payment and address.
    pub fn set_payment(&self, method: PaymentMethod) {
        self.fields.borrow_mut().payment = method;
        debug!(payment = %method, "payment set");
        self.validate_order_group();
    }

    pub fn validate_group(&self, group: FieldGroup) -> bool {
        match group {
            FieldGroup::Order => self.validate_order_group(),
            FieldGroup::Contacts => self.validate_contacts_group(),
        }
    }

    /// Recompute payment/address errors and emit `OrderErrorsChanged`.
    ///
    /// Emits on every call, even when the errors did not change.
    pub fn validate_order_group(&self) -> bool {
        let errors = validate_order_group(&self.fields.borrow());
        *self.order_errors.borrow_mut() = errors.clone();

        let valid = errors.is_empty();
        self.bus.emit(&ShopEvent::OrderErrorsChanged(errors));
        valid
    }

    /// Recompute email/phone errors and emit `ContactsErrorsChanged`.
    ///
    /// Emits on every call, even when the errors did not change.
    pub fn validate_contacts_group(&self) -> bool {
        let errors = validate_contacts_group(&self.fields.borrow());
        *self.contacts_errors.borrow_mut() = errors.clone();

        let valid = errors.is_empty();
        self.bus.emit(&ShopEvent::ContactsErrorsChanged(errors));
        valid
    }

    /// Combine the draft with the basket's ids and total. Does not mutate.
    pub fn snapshot(&self, basket: &BasketStore) -> OrderConfirmation {
        let fields = self.fields.borrow();
        OrderConfirmation {
            items: basket.ids(),
            payment: fields.payment,
            address: fields.address.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            total: basket.total(),
        }
    }

    /// Reset every field and both error maps, then emit `OrderChanged`.
    pub fn clear(&self) {
        *self.fields.borrow_mut() = OrderFields::default();
        *self.order_errors.borrow_mut() = FormErrors::new();
        *self.contacts_errors.borrow_mut() = FormErrors::new();

        debug!("order draft cleared");
        self.bus.emit(&ShopEvent::OrderChanged);
    }

    pub fn fields(&self) -> OrderFields {
        self.fields.borrow().clone()
    }

    pub fn order_errors(&self) -> FormErrors {
        self.order_errors.borrow().clone()
    }

    pub fn contacts_errors(&self) -> FormErrors {
        self.contacts_errors.borrow().clone()
    }
}
