use itertools::Itertools as _;

use super::Draggable;

impl Draggable {
    /// Log a lifecycle event through `log` and, if enabled, into the in-memory ring buffer.
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("draggable {:?}: {message}", self.element);
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message);
    }

    fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log
            .push_back(format!("[sample {}] {}", self.debug_sample, message));
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }

    /// The recorded debug log, one event per line. Empty unless
    /// [`super::DraggableOptions::debug_event_log`] is set.
    pub fn debug_log_text(&self) -> String {
        self.debug_log.iter().join("\n")
    }
}
