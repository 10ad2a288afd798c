use rust_decimal::Decimal;

/// A line-item quantity, always clamped to `0..=99`.
///
/// This is a wrapper around `u8` to enforce the form's quantity bound and
/// provide the lenient parse a numeric form field applies to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Quantity(u8);

impl Quantity {
    pub const MAX: u8 = 99;

    pub const ZERO: Self = Self(0);

    /// Clamps an arbitrary integer into the valid quantity range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX as i64) as u8)
    }

    /// Leniently parses raw field text the way a browser number input does:
    /// the leading integer prefix counts (`"2.7"` → 2, `"12abc"` → 12),
    /// anything non-numeric or empty counts as 0, and the result is clamped.
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        let (negative, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Self::ZERO;
        }

        // Absurdly long digit strings overflow i64; they clamp to MAX anyway.
        let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
        Self::new(if negative { -magnitude } else { magnitude })
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<Quantity> for Decimal {
    fn from(quantity: Quantity) -> Self {
        Decimal::from(quantity.0)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
