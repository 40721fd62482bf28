//! List the catalog.

use anyhow::{Context as _, Result};
use larek_commerce::catalog::Product;
use larek_data::StorefrontApi;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;

    let products: Vec<Product> = session
        .api
        .fetch_catalog()
        .context("Failed to load products")?
        .into_iter()
        .filter(|p| args.category.as_deref().map_or(true, |c| p.category == c))
        .filter(|p| !args.for_sale || p.is_for_sale())
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    // Publishing the list renders it through the coordinator.
    session.shop.catalog().set_catalog(products);
    session.report_failures();
    Ok(())
}
