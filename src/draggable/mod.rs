use std::collections::VecDeque;

use egui::{Pos2, Vec2};

mod bindings;
mod containment;
mod debug;
mod egui_input;
mod emitter;
mod geometry;
mod host;
mod input;
mod options;
mod pause;
mod types;


pub use bindings::{Bindings, Handler};
pub use containment::{clamp_axis, clamp_to_boundary};
pub use egui_input::{pointer_events_from_input, EguiFeedOutcome};
pub use emitter::{DragEmitter, Listener};
pub use geometry::{candidate, compute_origin, pointer_anchor, resolve_origin};
pub use host::{ClassToggler, DragHost, LayoutQuery, SceneHost, SceneNode, TransformApplier};
pub use input::{PointerEvent, SourceEvent};
pub use options::{DraggableOptions, OptionsError};
pub use types::{
    Axis, AxisFlags, AxisPolicies, Bounds, ClampPolicy, Containment, ContainmentOptions,
    DragEvent, DragEventKind, ElementId,
};

use pause::PauseNotifier;

/// Makes one element draggable by pointer or touch.
///
/// The controller is headless: geometry, translation and class toggling go through a
/// [`DragHost`] passed to each call, and input arrives through [`Self::dispatch`] (or the
/// egui adapter, [`Self::feed_egui`]).
///
/// Lifecycle:
/// - [`Self::new`] computes the element's origin (parent-relative position) right away.
/// - [`Self::attach`] binds mouse and touch sources on the handle (or the element itself).
/// - pointer-down anchors the pointer to the origin and emits [`DragEvent::Start`].
/// - every pointer-move applies a new position and emits [`DragEvent::Drag`];
///   [`Self::tick`] emits [`DragEvent::Pause`] once moves stop for
///   [`DraggableOptions::pause_delay`] while the drag is still held.
/// - pointer-up emits [`DragEvent::End`] and recomputes the origin.
/// - [`Self::destroy`] detaches everything; later input and timers are ignored.
#[derive(Debug)]
pub struct Draggable {
    pub options: DraggableOptions,

    element: ElementId,
    handle: Option<ElementId>,
    containment: Option<Containment>,
    axes: AxisFlags,
    bounds: Bounds,

    origin: Pos2,
    position: Pos2,
    pointer_anchor: Option<Vec2>,
    dragging: bool,

    bindings: Option<Bindings>,
    destroyed: bool,

    pause: PauseNotifier,
    emitter: DragEmitter,

    debug_log: VecDeque<String>,
    debug_sample: u64,
}

impl Draggable {
    pub fn new(host: &(impl LayoutQuery + ?Sized), element: ElementId) -> Self {
        Self::new_with_options(host, element, DraggableOptions::default())
    }

    pub fn new_with_options(
        host: &(impl LayoutQuery + ?Sized),
        element: ElementId,
        options: DraggableOptions,
    ) -> Self {
        let origin = resolve_origin(host, element).unwrap_or_else(|| {
            log::warn!("draggable {element:?}: no geometry at construction, origin is zero");
            Pos2::ZERO
        });

        Self {
            options,
            element,
            handle: None,
            containment: None,
            axes: AxisFlags::default(),
            bounds: Bounds::default(),
            origin,
            position: origin,
            pointer_anchor: None,
            dragging: false,
            bindings: None,
            destroyed: false,
            pause: PauseNotifier::default(),
            emitter: DragEmitter::default(),
            debug_log: VecDeque::new(),
            debug_sample: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Lifecycle

    /// Bind mouse and touch sources on the handle (or the element). Replaces existing bindings.
    pub fn attach(&mut self) -> &mut Self {
        if self.destroyed {
            log::warn!("draggable {:?}: attach after destroy ignored", self.element);
            return self;
        }
        let target = self.handle.unwrap_or(self.element);
        self.bindings = Some(Bindings::pointer_and_touch(target));
        self.debug_log_event(format!("attach target={target:?}"));
        self
    }

    /// Same as [`Self::attach`].
    pub fn build(&mut self) -> &mut Self {
        self.attach()
    }

    /// Unbind every source. Keeps the current position.
    ///
    /// An in-flight press is abandoned without an [`DragEvent::End`], and the dragging class
    /// stays on the element because removing it needs the host. Use [`Self::cancel_press`]
    /// first to release it cleanly.
    pub fn detach(&mut self) -> &mut Self {
        let Some(mut bindings) = self.bindings.take() else {
            return self;
        };
        bindings.unbind();
        self.pointer_anchor = None;
        self.dragging = false;
        self.pause.cancel();
        self.debug_log_event(format!("detach target={:?}", bindings.target()));
        self
    }

    /// Detach and drop listeners. Idempotent; the controller ignores all later input.
    ///
    /// Like [`Self::detach`], this does not touch the host: an active press keeps its
    /// dragging class unless [`Self::cancel_press`] runs first.
    pub fn destroy(&mut self) -> &mut Self {
        if self.destroyed {
            return self;
        }
        self.detach();
        self.pause.cancel();
        self.emitter.clear();
        self.destroyed = true;
        self.debug_log_event("destroy");
        self
    }

    // ------------------------------------------------------------------------
    // Configuration

    pub fn set_axis(&mut self, axis: Axis, enabled: bool) -> &mut Self {
        self.axes.set(axis, enabled);
        self
    }

    pub fn disable_x_axis(&mut self) -> &mut Self {
        self.set_axis(Axis::X, false)
    }

    pub fn disable_y_axis(&mut self) -> &mut Self {
        self.set_axis(Axis::Y, false)
    }

    /// Keep the element inside `boundary`. The boundary is assumed to share the element's
    /// parent coordinate space (usually it *is* the parent).
    pub fn set_containment(
        &mut self,
        boundary: ElementId,
        options: ContainmentOptions,
    ) -> &mut Self {
        self.containment = Some(Containment {
            boundary,
            policy: options.into(),
        });
        self
    }

    pub fn clear_containment(&mut self) -> &mut Self {
        self.containment = None;
        self
    }

    /// Take pointer-down from `handle` instead of the element. Applies on the next
    /// [`Self::attach`].
    pub fn set_handle(&mut self, handle: ElementId) -> &mut Self {
        self.handle = Some(handle);
        self
    }

    /// Override containment edges. Only consulted while a containment boundary is set.
    pub fn set_bounds(&mut self, bounds: Bounds) -> &mut Self {
        self.bounds = bounds;
        self
    }

    pub fn set_min_left(&mut self, value: f32) -> &mut Self {
        self.bounds.min_left = Some(value);
        self
    }

    pub fn set_max_left(&mut self, value: f32) -> &mut Self {
        self.bounds.max_left = Some(value);
        self
    }

    pub fn set_min_top(&mut self, value: f32) -> &mut Self {
        self.bounds.min_top = Some(value);
        self
    }

    pub fn set_max_top(&mut self, value: f32) -> &mut Self {
        self.bounds.max_top = Some(value);
        self
    }

    pub fn on(
        &mut self,
        kind: DragEventKind,
        listener: impl FnMut(&DragEvent) + 'static,
    ) -> &mut Self {
        self.emitter.on(kind, listener);
        self
    }

    pub fn off(&mut self, kind: DragEventKind) -> &mut Self {
        self.emitter.off(kind);
        self
    }

    /// Place the element directly, bypassing axis locks and containment. Emits nothing.
    pub fn move_to(&mut self, host: &mut (impl DragHost + ?Sized), x: f32, y: f32) -> &mut Self {
        let pos = Pos2::new(x, y);
        host.translate(self.element, pos);
        self.position = pos;
        self
    }

    // ------------------------------------------------------------------------
    // Accessors

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn handle(&self) -> Option<ElementId> {
        self.handle
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    /// Last position applied through the host.
    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn axes(&self) -> AxisFlags {
        self.axes
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn containment(&self) -> Option<Containment> {
        self.containment
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// True between a handled pointer-down and the matching pointer-up.
    pub fn is_pressed(&self) -> bool {
        self.pointer_anchor.is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.bindings.as_ref().is_some_and(Bindings::is_bound)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// When the pending pause is due, if any (same clock as [`Self::tick`]).
    pub fn pause_deadline(&self) -> Option<f64> {
        self.pause.deadline()
    }

    // ------------------------------------------------------------------------
    // Input

    /// Route one input sample through the bindings.
    ///
    /// Pointer-down is only accepted from the bound target. Move and up are accepted from
    /// any target while a press is active, so a drag keeps tracking when the pointer
    /// leaves the handle. Returns `true` if a handler ran; a handled pointer-down leaves
    /// [`PointerEvent::default_prevented`] set on `event`.
    pub fn dispatch(
        &mut self,
        host: &mut (impl DragHost + ?Sized),
        target: ElementId,
        event: &mut PointerEvent,
        now: f64,
    ) -> bool {
        if self.destroyed {
            return false;
        }
        let Some(bindings) = &self.bindings else {
            return false;
        };
        let Some(handler) = bindings.handler_for(event.source) else {
            return false;
        };

        match handler {
            Handler::Down => {
                if target != bindings.target() {
                    return false;
                }
                self.on_pointer_down(host, event);
            }
            Handler::Move => {
                if !self.is_pressed() {
                    return false;
                }
                self.on_pointer_move(host, event, now);
            }
            Handler::Up => {
                if !self.is_pressed() {
                    return false;
                }
                self.on_pointer_up(host, event);
            }
        }
        true
    }

    pub fn on_pointer_down(
        &mut self,
        host: &mut (impl DragHost + ?Sized),
        event: &mut PointerEvent,
    ) {
        if self.destroyed {
            return;
        }
        event.prevent_default();
        let page = event.primary_pos();

        self.refresh_origin(&*host);
        self.pointer_anchor = Some(pointer_anchor(page, self.origin));
        host.add_class(self.element, &self.options.dragging_class);

        self.debug_log_event(format!("start page={page:?} origin={:?}", self.origin));
        self.emitter.emit(&DragEvent::Start);
    }

    pub fn on_pointer_move(
        &mut self,
        host: &mut (impl DragHost + ?Sized),
        event: &PointerEvent,
        now: f64,
    ) {
        if self.destroyed {
            return;
        }
        let Some(anchor) = self.pointer_anchor else {
            log::trace!("draggable {:?}: move without press ignored", self.element);
            return;
        };

        let mut pos = candidate(event.primary_pos(), anchor, self.origin, self.axes);
        self.dragging = true;

        if let Some(containment) = self.containment {
            pos = self.contain(&*host, containment, pos);
        }

        host.translate(self.element, pos);
        self.position = pos;
        self.debug_sample = self.debug_sample.wrapping_add(1);
        log::trace!("draggable {:?}: drag to {pos:?}", self.element);

        self.emitter.emit(&DragEvent::Drag { x: pos.x, y: pos.y });
        self.pause.schedule(now, self.options.pause_delay, pos);
    }

    pub fn on_pointer_up(&mut self, host: &mut (impl DragHost + ?Sized), _event: &PointerEvent) {
        if self.destroyed {
            return;
        }
        if !self.is_pressed() {
            log::trace!("draggable {:?}: up without press ignored", self.element);
            return;
        }
        self.finish_press(host, "end");
    }

    /// End an in-flight press as if the pointer had been released: removes the dragging
    /// class, emits [`DragEvent::End`] and recomputes the origin. Returns `false` if no
    /// press was active.
    ///
    /// Call this before [`Self::detach`] or [`Self::destroy`] when the host should not keep
    /// the dragging class or wait for an `End`.
    pub fn cancel_press(&mut self, host: &mut (impl DragHost + ?Sized)) -> bool {
        if self.destroyed || !self.is_pressed() {
            return false;
        }
        self.finish_press(host, "cancel");
        true
    }

    /// Deferred timer step: emits [`DragEvent::Pause`] when the quiescence window has
    /// elapsed and the drag is still held. Returns the paused position.
    pub fn tick(&mut self, now: f64) -> Option<Pos2> {
        if self.destroyed {
            self.pause.cancel();
            return None;
        }
        let pos = self.pause.poll(now)?;
        if !self.dragging {
            return None;
        }
        self.debug_log_event(format!("pause at {pos:?}"));
        self.emitter.emit(&DragEvent::Pause { x: pos.x, y: pos.y });
        Some(pos)
    }

    /// Re-read the element's parent-relative position from the host.
    ///
    /// Keeps the previous origin if the host has no geometry for the element.
    pub fn refresh_origin(&mut self, host: &(impl LayoutQuery + ?Sized)) -> Pos2 {
        match resolve_origin(host, self.element) {
            Some(origin) => self.origin = origin,
            None => log::warn!(
                "draggable {:?}: element or parent has no geometry, keeping origin {:?}",
                self.element,
                self.origin
            ),
        }
        self.origin
    }

    fn finish_press(&mut self, host: &mut (impl DragHost + ?Sized), reason: &str) {
        host.remove_class(self.element, &self.options.dragging_class);
        self.dragging = false;
        self.pointer_anchor = None;
        self.pause.cancel();
        self.refresh_origin(&*host);

        self.debug_log_event(format!("{reason} origin={:?}", self.origin));
        self.emitter.emit(&DragEvent::End);
    }

    fn contain(
        &self,
        host: &(impl LayoutQuery + ?Sized),
        containment: Containment,
        pos: Pos2,
    ) -> Pos2 {
        let (Some(element_rect), Some(boundary_rect)) =
            (host.rect(self.element), host.rect(containment.boundary))
        else {
            log::warn!(
                "draggable {:?}: containment {:?} has no geometry, not clamping",
                self.element,
                containment.boundary
            );
            return pos;
        };

        clamp_to_boundary(
            pos,
            element_rect.size(),
            boundary_rect.size(),
            containment.policy,
            &self.bounds,
        )
    }
}
