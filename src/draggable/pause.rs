use egui::Pos2;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    deadline: f64,
    pos: Pos2,
}

/// Trailing-edge debounce for the `pause` signal. Owned by a single controller.
///
/// Time is in seconds on the caller's clock (egui's `InputState::time`).
#[derive(Clone, Debug, Default, PartialEq)]
pub(super) struct PauseNotifier {
    pending: Option<Pending>,
}

impl PauseNotifier {
    /// Replace any pending schedule with one firing `delay` seconds after `now`.
    pub(super) fn schedule(&mut self, now: f64, delay: f64, pos: Pos2) {
        self.pending = Some(Pending {
            deadline: now + delay.max(0.0),
            pos,
        });
    }

    pub(super) fn cancel(&mut self) {
        self.pending = None;
    }

    pub(super) fn deadline(&self) -> Option<f64> {
        self.pending.map(|p| p.deadline)
    }

    /// Take the scheduled position if its deadline has passed.
    pub(super) fn poll(&mut self, now: f64) -> Option<Pos2> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        Some(pending.pos)
    }
}
