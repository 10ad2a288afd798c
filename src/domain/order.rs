use rust_decimal::Decimal;
use serde::Serialize;

/// The settled state of one line item.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct LineSnapshot {
    pub item: String,
    pub price: Decimal,
    pub quantity: u8,
    pub subtotal: Decimal,
}

/// The settled state of the whole form after all animations and timers have
/// run out. `display` and `submit_enabled` are `None` when the surface has no
/// total display or submit control.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct OrderSnapshot {
    pub lines: Vec<LineSnapshot>,
    pub total: Decimal,
    pub display: Option<String>,
    pub submit_enabled: Option<bool>,
}
