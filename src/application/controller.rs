use crate::domain::animation::TotalAnimation;
use crate::domain::menu::MenuEntry;
use crate::domain::order::{LineSnapshot, OrderSnapshot};
use crate::domain::ports::FormSurface;
use crate::domain::quantity::Quantity;
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::time::Instant;

/// How long a changed line item stays visually marked.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(400);

/// Delay between a form reset and the follow-up recalculation, giving the
/// native reset time to restore default field values first.
pub const RESET_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy)]
enum TimerAction {
    ClearHighlight(usize),
    Recalculate,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: Instant,
    action: TimerAction,
}

/// The quantity form controller.
///
/// Owns its surface and the menu it was bound to, plus the last settled
/// total, the in-flight total animations and the pending one-shot timers.
/// Event handlers (`on_input`, `on_change`, `on_reset`) mutate state
/// synchronously; rendering happens one frame at a time through `on_frame`,
/// with timestamps supplied by the caller.
pub struct FormController<S: FormSurface> {
    surface: S,
    menu: Vec<MenuEntry>,
    settled_total: Decimal,
    animations: Vec<TotalAnimation>,
    timers: Vec<Timer>,
}

impl<S: FormSurface> FormController<S> {
    pub fn new(menu: Vec<MenuEntry>, surface: S) -> Self {
        Self {
            surface,
            menu,
            settled_total: Decimal::ZERO,
            animations: Vec::new(),
            timers: Vec::new(),
        }
    }

    /// Page-ready: one immediate recalculation so non-zero default
    /// quantities produce a correct initial total and submit state.
    pub fn init(&mut self, now: Instant) {
        self.recalculate(now);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn settled_total(&self) -> Decimal {
        self.settled_total
    }

    pub fn line_index(&self, item: &str) -> Option<usize> {
        self.menu.iter().position(|entry| entry.item == item)
    }

    /// True once no animations or timers remain live.
    pub fn is_idle(&self) -> bool {
        self.animations.is_empty() && self.timers.is_empty()
    }

    pub fn on_input(&mut self, now: Instant) {
        self.recalculate(now);
    }

    /// Marks the changed line and schedules the one-shot clear. The timer is
    /// never cancelled; clearing an already-clear highlight is a no-op.
    pub fn on_change(&mut self, line: usize, now: Instant) {
        if line >= self.menu.len() {
            return;
        }
        self.surface.set_highlighted(line, true);
        self.timers.push(Timer {
            due: now + HIGHLIGHT_DURATION,
            action: TimerAction::ClearHighlight(line),
        });
    }

    pub fn on_reset(&mut self, now: Instant) {
        self.timers.push(Timer {
            due: now + RESET_DELAY,
            action: TimerAction::Recalculate,
        });
    }

    /// Normalizes every field, recomputes the total, starts the total
    /// animation and gates the submit control.
    ///
    /// A running animation is left alone; the new one captures the current
    /// settled total as its start value.
    pub fn recalculate(&mut self, now: Instant) {
        let mut sum = Decimal::ZERO;
        for line in 0..self.menu.len() {
            let raw = self.surface.field_text(line).unwrap_or_default();
            let quantity = Quantity::parse(&raw);
            self.surface.set_field_text(line, &quantity.to_string());
            sum += self.menu[line].line_total(quantity);
        }

        self.animations
            .push(TotalAnimation::new(self.settled_total, sum, now));
        self.surface.set_submit_enabled(!sum.is_zero());
    }

    /// Advances one frame: fires due timers in the order they were
    /// scheduled, then renders every live animation. When animations
    /// overlap, later-started ones write last, so the newest transition wins
    /// the frame; each still settles its own target when it completes.
    pub fn on_frame(&mut self, now: Instant) {
        let mut index = 0;
        while index < self.timers.len() {
            if self.timers[index].due > now {
                index += 1;
                continue;
            }
            let timer = self.timers.remove(index);
            match timer.action {
                TimerAction::ClearHighlight(line) => self.surface.set_highlighted(line, false),
                TimerAction::Recalculate => self.recalculate(now),
            }
        }

        let mut live = 0;
        for i in 0..self.animations.len() {
            let animation = self.animations[i];
            self.surface.set_total_text(&animation.render(now));
            if animation.is_complete(now) {
                self.settled_total = animation.target();
            } else {
                self.animations[live] = animation;
                live += 1;
            }
        }
        self.animations.truncate(live);
    }

    /// The settled order state, for reporting once the loop has gone idle.
    pub fn snapshot(&self) -> OrderSnapshot {
        let mut lines = Vec::with_capacity(self.menu.len());
        let mut total = Decimal::ZERO;
        for (line, entry) in self.menu.iter().enumerate() {
            let raw = self.surface.field_text(line).unwrap_or_default();
            let quantity = Quantity::parse(&raw);
            let subtotal = entry.line_total(quantity);
            total += subtotal;
            lines.push(LineSnapshot {
                item: entry.item.clone(),
                price: entry.price,
                quantity: quantity.get(),
                subtotal,
            });
        }

        OrderSnapshot {
            lines,
            total,
            display: self.surface.total_text(),
            submit_enabled: self.surface.submit_enabled(),
        }
    }
}
