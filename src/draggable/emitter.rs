use super::types::{DragEvent, DragEventKind};

pub type Listener = Box<dyn FnMut(&DragEvent)>;

/// Synchronous in-process pub/sub for [`DragEvent`]s.
///
/// Listeners run in registration order, on the caller's stack, before `emit` returns.
#[derive(Default)]
pub struct DragEmitter {
    listeners: ahash::HashMap<DragEventKind, Vec<Listener>>,
}

impl std::fmt::Debug for DragEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(DragEventKind, usize)> = self
            .listeners
            .iter()
            .map(|(kind, listeners)| (*kind, listeners.len()))
            .collect();
        counts.sort_by_key(|(kind, _)| *kind as u8);
        f.debug_struct("DragEmitter")
            .field("listeners", &counts)
            .finish()
    }
}

impl DragEmitter {
    pub fn on(&mut self, kind: DragEventKind, listener: impl FnMut(&DragEvent) + 'static) {
        self.listeners
            .entry(kind)
            .or_default()
            .push(Box::new(listener));
    }

    /// Remove every listener registered for `kind`.
    pub fn off(&mut self, kind: DragEventKind) {
        self.listeners.remove(&kind);
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn has_listeners(&self, kind: DragEventKind) -> bool {
        self.listeners.get(&kind).is_some_and(|l| !l.is_empty())
    }

    pub fn emit(&mut self, event: &DragEvent) {
        if let Some(listeners) = self.listeners.get_mut(&event.kind()) {
            for listener in listeners {
                listener(event);
            }
        }
    }
}
