use egui::{Context, Event, Pos2, TouchPhase};

use super::host::DragHost;
use super::input::{PointerEvent, SourceEvent};
use super::types::ElementId;
use super::Draggable;

/// Convert this pass's egui events into pointer samples, in delivery order.
///
/// Only the primary button is considered. egui backends already synthesize pointer events
/// for the first touch, so touch events are skipped unless `include_touch` is set (for
/// hosts that feed raw touches without that simulation).
pub fn pointer_events_from_input(events: &[Event], include_touch: bool) -> Vec<PointerEvent> {
    events
        .iter()
        .filter_map(|event| match *event {
            Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => Some(if pressed {
                PointerEvent::mouse_down(pos)
            } else {
                PointerEvent::mouse_up(pos)
            }),
            Event::PointerMoved(pos) => Some(PointerEvent::mouse_move(pos)),
            Event::Touch { phase, pos, .. } if include_touch => Some(match phase {
                TouchPhase::Start => PointerEvent::touch(SourceEvent::TouchStart, pos),
                TouchPhase::Move => PointerEvent::touch(SourceEvent::TouchMove, pos),
                TouchPhase::End | TouchPhase::Cancel => {
                    PointerEvent::new(SourceEvent::TouchEnd, pos)
                }
            }),
            _ => None,
        })
        .collect()
}

/// What happened during one [`Draggable::feed_egui`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EguiFeedOutcome {
    /// Number of samples a handler ran for.
    pub handled: usize,

    /// Set if the pause fired during this pass.
    pub paused: Option<Pos2>,
}

impl Draggable {
    /// Drive the controller from an egui pass: dispatch pointer input, run the pause timer on
    /// `InputState::time`, and request a repaint for when the pending pause is due.
    ///
    /// Pointer-down targets the bound handle when it lands inside the handle's rect.
    pub fn feed_egui(
        &mut self,
        ctx: &Context,
        host: &mut (impl DragHost + ?Sized),
    ) -> EguiFeedOutcome {
        let (events, now) = ctx.input(|i| (pointer_events_from_input(&i.events, false), i.time));

        let mut outcome = EguiFeedOutcome::default();
        if let Some(bound) = self.bindings.as_ref().map(|b| b.target()) {
            for mut event in events {
                let pos = event.primary_pos();
                let target = if host.rect(bound).is_some_and(|r| r.contains(pos)) {
                    bound
                } else {
                    ElementId::NULL
                };
                if self.dispatch(host, target, &mut event, now) {
                    outcome.handled += 1;
                }
            }
        }

        outcome.paused = self.tick(now);
        if let Some(deadline) = self.pause_deadline() {
            ctx.request_repaint_after_secs((deadline - now).max(0.0) as f32);
        }
        outcome
    }
}
