//! Product type.

use larek_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// Style modifier for each category the API returns.
pub const CATEGORY_CLASSES: [(&str, &str); 5] = [
    ("софт-скил", "card__category_soft"),
    ("хард-скил", "card__category_hard"),
    ("другое", "card__category_other"),
    ("дополнительное", "card__category_additional"),
    ("кнопка", "card__category_button"),
];

/// Look up the style modifier for a category label.
pub fn category_class(category: &str) -> Option<&'static str> {
    CATEGORY_CLASSES
        .iter()
        .find(|(label, _)| *label == category)
        .map(|(_, class)| *class)
}

/// A product in the catalog.
///
/// Immutable once loaded; identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Absolute image URL once the transport layer has applied the CDN prefix.
    #[serde(default)]
    pub image: String,
    /// `None` means the product is not for sale.
    pub price: Option<Price>,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: Option<Price>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            image: String::new(),
            price,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Products without a price cannot be put in the basket.
    pub fn is_for_sale(&self) -> bool {
        self.price.is_some()
    }

    pub fn price_label(&self) -> String {
        Price::label(self.price)
    }

    pub fn category_class(&self) -> Option<&'static str> {
        category_class(&self.category)
    }
}
