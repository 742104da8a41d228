use super::input::SourceEvent;
use super::types::ElementId;

/// Controller entry points a source event can be routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handler {
    Down,
    Move,
    Up,
}

/// Listener table for one element: which source events reach which handler.
///
/// Dropping or [`Self::unbind`]ing the table is what "detaching listeners" means for a
/// headless controller: no entry, no dispatch.
#[derive(Clone, Debug)]
pub struct Bindings {
    target: ElementId,
    entries: Vec<(SourceEvent, Handler)>,
}

impl Bindings {
    pub fn new(target: ElementId) -> Self {
        Self {
            target,
            entries: Vec::new(),
        }
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    /// Route `source` to `handler`, replacing a previous binding of the same source.
    pub fn bind(&mut self, source: SourceEvent, handler: Handler) -> &mut Self {
        self.entries.retain(|(s, _)| *s != source);
        self.entries.push((source, handler));
        self
    }

    pub fn unbind(&mut self) {
        self.entries.clear();
    }

    pub fn is_bound(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn handler_for(&self, source: SourceEvent) -> Option<Handler> {
        self.entries
            .iter()
            .find(|(s, _)| *s == source)
            .map(|&(_, handler)| handler)
    }

    /// Mouse and touch bindings used by a draggable handle.
    pub(super) fn pointer_and_touch(target: ElementId) -> Self {
        let mut bindings = Self::new(target);
        bindings
            .bind(SourceEvent::TouchStart, Handler::Down)
            .bind(SourceEvent::TouchMove, Handler::Move)
            .bind(SourceEvent::TouchEnd, Handler::Up)
            .bind(SourceEvent::MouseDown, Handler::Down)
            .bind(SourceEvent::MouseMove, Handler::Move)
            .bind(SourceEvent::MouseUp, Handler::Up);
        bindings
    }
}
