use egui::{Id, Pos2};

/// Identifies a node known to the [`super::DragHost`]: the dragged element, its handle,
/// its parent or a containment boundary.
pub type ElementId = Id;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Axis {
    X,
    Y,
}

/// Which axes follow the pointer. A disabled axis stays at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AxisFlags {
    pub x: bool,
    pub y: bool,
}

impl Default for AxisFlags {
    fn default() -> Self {
        Self { x: true, y: true }
    }
}

impl AxisFlags {
    pub fn get(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, enabled: bool) {
        match axis {
            Axis::X => self.x = enabled,
            Axis::Y => self.y = enabled,
        }
    }
}

/// What part of the dragged element is kept inside the containment boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ClampPolicy {
    /// The element's edges stay inside the boundary.
    #[default]
    EdgeAligned,

    /// The element's center may reach the boundary edges, so half of it can hang outside.
    MidpointAligned,
}

impl ClampPolicy {
    pub fn from_midpoint_flag(middle: bool) -> Self {
        if middle {
            Self::MidpointAligned
        } else {
            Self::EdgeAligned
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AxisPolicies {
    pub x: ClampPolicy,
    pub y: ClampPolicy,
}

/// Options accepted by [`super::Draggable::set_containment`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ContainmentOptions {
    /// Contain the horizontal midpoint instead of the left/right edges.
    pub middle_x: bool,

    /// Contain the vertical midpoint instead of the top/bottom edges.
    pub middle_y: bool,
}

impl From<ContainmentOptions> for AxisPolicies {
    fn from(options: ContainmentOptions) -> Self {
        Self {
            x: ClampPolicy::from_midpoint_flag(options.middle_x),
            y: ClampPolicy::from_midpoint_flag(options.middle_y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Containment {
    pub boundary: ElementId,
    pub policy: AxisPolicies,
}

/// Explicit overrides for the containment edges, in boundary-local coordinates.
///
/// `min_*` replaces the lower clamp value outright. `max_*` replaces the far edge the
/// element's trailing side may reach (normally the boundary's width/height).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Bounds {
    pub min_left: Option<f32>,
    pub max_left: Option<f32>,
    pub min_top: Option<f32>,
    pub max_top: Option<f32>,
}

impl Bounds {
    pub(super) fn min(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::X => self.min_left,
            Axis::Y => self.min_top,
        }
    }

    pub(super) fn max(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::X => self.max_left,
            Axis::Y => self.max_top,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DragEventKind {
    Start,
    Drag,
    Pause,
    End,
}

/// Emitted by a [`super::Draggable`] to listeners registered with [`super::Draggable::on`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum DragEvent {
    Start,
    Drag { x: f32, y: f32 },
    Pause { x: f32, y: f32 },
    End,
}

impl DragEvent {
    pub fn kind(&self) -> DragEventKind {
        match self {
            Self::Start => DragEventKind::Start,
            Self::Drag { .. } => DragEventKind::Drag,
            Self::Pause { .. } => DragEventKind::Pause,
            Self::End => DragEventKind::End,
        }
    }

    pub fn pos(&self) -> Option<Pos2> {
        match *self {
            Self::Drag { x, y } | Self::Pause { x, y } => Some(Pos2::new(x, y)),
            Self::Start | Self::End => None,
        }
    }
}
