use crate::domain::quantity::Quantity;
use crate::error::{FormError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A single orderable item: a name, a fixed unit price and the default text
/// its quantity field starts with (matters when the form loads with non-zero
/// defaults).
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct MenuEntry {
    pub item: String,
    pub price: Decimal,
    #[serde(default)]
    pub quantity: Option<String>,
}

impl MenuEntry {
    pub fn new(item: impl Into<String>, price: Decimal) -> Self {
        Self {
            item: item.into(),
            price,
            quantity: None,
        }
    }

    /// Rejects entries a real menu could not carry and normalizes the price
    /// to two decimal places.
    ///
    /// CSV numeric fields arrive without their written scale ("5.00" reads
    /// back as `5`); money is always carried at two decimals so snapshots
    /// render as written.
    pub fn validated(mut self) -> Result<Self> {
        if self.price < Decimal::ZERO {
            return Err(FormError::ValidationError(format!(
                "negative price for '{}'",
                self.item
            )));
        }
        self.price.rescale(2);
        Ok(self)
    }

    /// The quantity field's default text; an absent column means an empty field.
    pub fn default_text(&self) -> &str {
        self.quantity.as_deref().unwrap_or("")
    }

    pub fn line_total(&self, quantity: Quantity) -> Decimal {
        self.price * Decimal::from(quantity)
    }
}
