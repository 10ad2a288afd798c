use crate::application::controller::FormController;
use crate::domain::event::{EventKind, FormEvent};
use crate::domain::ports::FormSurface;
use std::time::Duration;
use tokio::time::{self, Instant};

/// Frame cadence of the replay loop, roughly one frame every 16ms.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Drives the controller's frame loop, applying scripted events as their
/// timestamps come due.
///
/// Initializes the controller (the page-ready recalculation), then ticks
/// frames until the script is exhausted and the controller has gone idle.
/// Events referencing unknown items are skipped silently; the CLI validates
/// names up front and reports them.
pub async fn replay<S: FormSurface>(controller: &mut FormController<S>, mut events: Vec<FormEvent>) {
    events.sort_by_key(|event| event.at_ms);

    let epoch = Instant::now();
    controller.init(epoch);

    let mut pending = events.into_iter().peekable();
    let mut interval = time::interval(FRAME_INTERVAL);
    loop {
        let now = interval.tick().await;
        let elapsed_ms = now.saturating_duration_since(epoch).as_millis() as u64;

        while let Some(event) = pending.next_if(|event| event.at_ms <= elapsed_ms) {
            apply(controller, event, now);
        }
        controller.on_frame(now);

        if pending.peek().is_none() && controller.is_idle() {
            break;
        }
    }
}

fn apply<S: FormSurface>(controller: &mut FormController<S>, event: FormEvent, now: Instant) {
    match event.event {
        EventKind::Input => {
            let Some(line) = event
                .item
                .as_deref()
                .and_then(|item| controller.line_index(item))
            else {
                return;
            };
            controller
                .surface_mut()
                .set_field_text(line, event.value.as_deref().unwrap_or(""));
            controller.on_input(now);
        }
        EventKind::Change => {
            let Some(line) = event
                .item
                .as_deref()
                .and_then(|item| controller.line_index(item))
            else {
                return;
            };
            controller.on_change(line, now);
        }
        EventKind::Reset => {
            // The native reset applies before the controller's delayed recalc
            controller.surface_mut().reset_fields();
            controller.on_reset(now);
        }
    }
}
