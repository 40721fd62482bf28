//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod show;

use clap::Args;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list products in this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Hide products that are not for sale.
    #[arg(long)]
    pub for_sale: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Product id to put in the basket (repeatable).
    #[arg(short, long = "item", required = true)]
    pub items: Vec<String>,

    /// Payment method.
    #[arg(long, value_parser = ["card", "cash"])]
    pub payment: String,

    /// Delivery address.
    #[arg(long)]
    pub address: String,

    /// Contact email.
    #[arg(long)]
    pub email: String,

    /// Contact phone.
    #[arg(long)]
    pub phone: String,

    /// Validate and print the order without submitting it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Also print where the configuration was loaded from.
    #[arg(long)]
    pub source: bool,
}
