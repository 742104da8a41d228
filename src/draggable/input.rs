use egui::Pos2;

/// Raw input kinds a handle element can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceEvent {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl SourceEvent {
    pub fn is_touch(self) -> bool {
        matches!(self, Self::TouchStart | Self::TouchMove | Self::TouchEnd)
    }
}

/// One input sample, as delivered by the event source.
///
/// `page` is the pointer position in page (global) coordinates. For touch events `touches`
/// holds the active contact points; only the first one is ever used.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub source: SourceEvent,
    pub page: Pos2,
    pub touches: Vec<Pos2>,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn new(source: SourceEvent, page: Pos2) -> Self {
        Self {
            source,
            page,
            touches: Vec::new(),
            default_prevented: false,
        }
    }

    pub fn mouse_down(page: Pos2) -> Self {
        Self::new(SourceEvent::MouseDown, page)
    }

    pub fn mouse_move(page: Pos2) -> Self {
        Self::new(SourceEvent::MouseMove, page)
    }

    pub fn mouse_up(page: Pos2) -> Self {
        Self::new(SourceEvent::MouseUp, page)
    }

    /// A touch sample whose first contact is `first`.
    pub fn touch(source: SourceEvent, first: Pos2) -> Self {
        debug_assert!(source.is_touch(), "not a touch source: {source:?}");
        Self {
            source,
            page: first,
            touches: vec![first],
            default_prevented: false,
        }
    }

    /// Position of the sample after normalizing a touch event to its first contact point.
    pub fn primary_pos(&self) -> Pos2 {
        self.touches.first().copied().unwrap_or(self.page)
    }

    /// Ask the source not to run its default action (text selection, scrolling, …).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
