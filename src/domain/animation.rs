use rust_decimal::Decimal;
use std::time::Duration;
use tokio::time::Instant;

/// The fixed window over which the displayed total blends to its new value.
pub const TOTAL_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// Renders a monetary value with a leading `$` and exactly two fractional
/// digits (`12.5` → `"$12.50"`).
pub fn format_currency(value: Decimal) -> String {
    format!("${value:.2}")
}

/// A linear interpolation of the displayed total from `start` to `end`.
///
/// Start and end are captured when the animation begins and never updated:
/// a recalculation that fires while this animation is still running starts a
/// second animation rather than cancelling this one, so two interpolations
/// can visually race, exactly like the form it models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalAnimation {
    start: Decimal,
    end: Decimal,
    started_at: Instant,
}

impl TotalAnimation {
    pub fn new(start: Decimal, end: Decimal, now: Instant) -> Self {
        Self {
            start,
            end,
            started_at: now,
        }
    }

    pub fn target(&self) -> Decimal {
        self.end
    }

    /// Elapsed fraction of the animation window, capped at 1.
    ///
    /// Computed in exact millisecond arithmetic so frame rendering stays
    /// deterministic under test.
    pub fn progress(&self, now: Instant) -> Decimal {
        let elapsed = now
            .saturating_duration_since(self.started_at)
            .min(TOTAL_ANIMATION_DURATION);
        Decimal::from(elapsed.as_millis() as u64)
            / Decimal::from(TOTAL_ANIMATION_DURATION.as_millis() as u64)
    }

    pub fn value_at(&self, now: Instant) -> Decimal {
        self.start + (self.end - self.start) * self.progress(now)
    }

    pub fn render(&self, now: Instant) -> String {
        format_currency(self.value_at(now))
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= Decimal::ONE
    }
}
