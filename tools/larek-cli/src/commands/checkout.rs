//! Fill the basket and place an order.

use anyhow::{bail, Context as _, Result};
use larek_commerce::checkout::{FieldGroup, OrderField, PaymentMethod};
use larek_commerce::ShopEvent;
use larek_core::ProductId;

use super::CheckoutArgs;
use crate::context::{Context, Session};

/// Run the checkout command.
///
/// Walks the same sequence of events a shopper's clicks would produce.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;

    let loaded = session.coordinator.load_catalog();
    session.report_failures();
    if !loaded {
        bail!(session
            .view
            .last_error()
            .unwrap_or_else(|| "Catalog unavailable".to_string()));
    }

    for item in &args.items {
        let id = ProductId::new(item.as_str());
        if session.shop.basket().contains(&id) {
            ctx.output.warn(&format!("{} listed twice; keeping one", id));
            continue;
        }
        session.emit(&ShopEvent::BasketToggle(id.clone()));
        if !session.shop.basket().contains(&id) {
            bail!("Product {} is not in the catalog or not for sale", id);
        }
    }

    // Step one: payment and address
    let payment: PaymentMethod = args.payment.parse().context("Invalid payment method")?;
    session.emit(&ShopEvent::OrderOpen);
    session.emit(&ShopEvent::PaymentChanged(payment));
    field(&session, OrderField::Address, &args.address);
    ensure_valid(&session, FieldGroup::Order)?;

    // Step two: contacts
    session.emit(&ShopEvent::OrderSubmitted);
    field(&session, OrderField::Email, &args.email);
    field(&session, OrderField::Phone, &args.phone);
    ensure_valid(&session, FieldGroup::Contacts)?;

    if args.dry_run {
        ctx.output.info("Dry run; the order was not submitted");
        ctx.output.json(&session.shop.confirmation());
        return Ok(());
    }

    session.emit(&ShopEvent::ContactsSubmitted);

    match session.view.success() {
        Some(total) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "total": total }));
            }
            session.emit(&ShopEvent::OrderFinished);
            Ok(())
        }
        None => bail!(session
            .view
            .last_error()
            .unwrap_or_else(|| "The order was not placed".to_string())),
    }
}

fn field(session: &Session, field: OrderField, value: &str) {
    session.emit(&ShopEvent::FieldChanged {
        field,
        value: value.to_string(),
    });
}

fn ensure_valid(session: &Session, group: FieldGroup) -> Result<()> {
    let status = match group {
        FieldGroup::Order => session.view.order_status(),
        FieldGroup::Contacts => session.view.contacts_status(),
    };
    match status {
        Some(status) if !status.valid => bail!(status.errors),
        _ => Ok(()),
    }
}
