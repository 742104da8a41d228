//! Headless drag controller for egui-style hosts.
//!
//! A [`Draggable`] turns pointer and touch samples into a parent-relative position for one
//! element, with optional axis locking, a drag handle, containment inside another element
//! (edge- or midpoint-aligned per axis, with explicit min/max overrides) and a debounced
//! `pause` signal while the drag is held still.
//!
//! Geometry, translation and class toggling are delegated to a [`DragHost`]; [`SceneHost`]
//! is a small in-memory implementation. [`Draggable::feed_egui`] drives a controller
//! straight from an `egui::Context`.

#![forbid(unsafe_code)]

pub mod draggable;

pub use draggable::{
    Axis, AxisFlags, AxisPolicies, Bindings, Bounds, ClampPolicy, ClassToggler, Containment,
    ContainmentOptions, DragEmitter, DragEvent, DragEventKind, DragHost, Draggable,
    DraggableOptions, EguiFeedOutcome, ElementId, Handler, LayoutQuery, OptionsError,
    PointerEvent, SceneHost, SceneNode, SourceEvent, TransformApplier,
};
