//! The storefront API boundary.

use std::time::Duration;

use larek_commerce::catalog::Product;
use larek_commerce::checkout::{OrderConfirmation, OrderResult};
use larek_core::{ApiConfig, ProductId};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{FetchClient, FetchError};

/// What the application needs from the backend.
pub trait StorefrontApi {
    /// Every product, image URLs already resolved.
    fn fetch_catalog(&self) -> Result<Vec<Product>, FetchError>;

    fn fetch_product(&self, id: &ProductId) -> Result<Product, FetchError>;

    fn submit_order(&self, order: &OrderConfirmation) -> Result<OrderResult, FetchError>;
}

/// Envelope of list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub items: Vec<T>,
}

/// [`StorefrontApi`] over the Larek HTTP API.
pub struct LarekApi {
    client: FetchClient,
    cdn_url: String,
}

impl LarekApi {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = FetchClient::new(Duration::from_secs(config.timeout_secs))?
            .with_base_url(config.base_url.clone())
            .with_default_header("Accept", "application/json");

        Ok(Self {
            client,
            cdn_url: config.cdn_url.clone(),
        })
    }

    /// Prefix the image path with the CDN. List responses reference SVG
    /// sources that the CDN only serves as PNG, so those are rewritten.
    pub fn resolve_image(&self, mut product: Product, from_list: bool) -> Product {
        let path = if from_list {
            product.image.replacen(".svg", ".png", 1)
        } else {
            std::mem::take(&mut product.image)
        };
        product.image = format!("{}{}", self.cdn_url, path);
        product
    }
}

impl StorefrontApi for LarekApi {
    fn fetch_catalog(&self) -> Result<Vec<Product>, FetchError> {
        let list: ListResponse<Product> = self
            .client
            .get("/product")
            .send()?
            .error_for_status()?
            .json()?;

        debug!(total = list.total, received = list.items.len(), "catalog fetched");
        Ok(list
            .items
            .into_iter()
            .map(|product| self.resolve_image(product, true))
            .collect())
    }

    fn fetch_product(&self, id: &ProductId) -> Result<Product, FetchError> {
        let product: Product = self
            .client
            .get(format!("/product/{}", id))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(self.resolve_image(product, false))
    }

    fn submit_order(&self, order: &OrderConfirmation) -> Result<OrderResult, FetchError> {
        let result: OrderResult = self
            .client
            .post("/order")
            .json(order)?
            .send()?
            .error_for_status()?
            .json()?;

        info!(order = %result.id, total = %result.total, "order accepted");
        Ok(result)
    }
}
