//! Buy / remove button label.

/// Text of the button on a product preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonLabel {
    /// The product has no price; the button is disabled.
    NotForSale,
    /// The product is already in the basket.
    Remove,
    Buy,
}

impl ButtonLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonLabel::NotForSale => "Not for sale",
            ButtonLabel::Remove => "Remove from basket",
            ButtonLabel::Buy => "Buy",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, ButtonLabel::NotForSale)
    }
}

impl std::fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
