//! Preview one product.

use anyhow::{Context as _, Result};
use larek_core::ProductId;
use larek_data::StorefrontApi;

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let id = ProductId::new(args.id);

    let product = session
        .api
        .fetch_product(&id)
        .with_context(|| format!("Failed to fetch product {}", id))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    session.shop.catalog().set_preview(Some(product));
    session.report_failures();
    Ok(())
}
