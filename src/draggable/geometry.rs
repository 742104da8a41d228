use egui::{Pos2, Rect, Vec2};

use super::host::LayoutQuery;
use super::types::{AxisFlags, ElementId};

/// Position of an element in its parent's coordinate space.
pub fn compute_origin(element_rect: Rect, parent_rect: Rect) -> Pos2 {
    (element_rect.min - parent_rect.min).to_pos2()
}

/// Reads the current origin of `element` from the host.
///
/// `None` if the element is unknown or has no parent box.
pub fn resolve_origin(host: &(impl LayoutQuery + ?Sized), element: ElementId) -> Option<Pos2> {
    let rect = host.rect(element)?;
    let parent_rect = host.parent_rect(element)?;
    Some(compute_origin(rect, parent_rect))
}

/// Offset between the pointer and the element origin at drag start.
pub fn pointer_anchor(page: Pos2, origin: Pos2) -> Vec2 {
    page - origin
}

/// Unclamped element position for a pointer sample. Locked axes stay at the origin.
pub fn candidate(page: Pos2, anchor: Vec2, origin: Pos2, axes: AxisFlags) -> Pos2 {
    let moved = page - anchor;
    Pos2::new(
        if axes.x { moved.x } else { origin.x },
        if axes.y { moved.y } else { origin.y },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draggable::host::SceneHost;

    #[test]
    fn origin_is_parent_relative() {
        let element = Rect::from_min_size(Pos2::new(110.0, 60.0), Vec2::splat(50.0));
        let parent = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::splat(200.0));
        assert_eq!(compute_origin(element, parent), Pos2::new(10.0, 10.0));
    }

    #[test]
    fn resolve_origin_reads_host_geometry() {
        let parent = ElementId::new("parent");
        let element = ElementId::new("element");
        let mut host = SceneHost::new();
        host.insert_root(
            parent,
            Rect::from_min_size(Pos2::new(30.0, 40.0), Vec2::splat(200.0)),
        );
        host.insert_child(element, parent, Vec2::new(10.0, 12.0), Vec2::splat(50.0));

        assert_eq!(resolve_origin(&host, element), Some(Pos2::new(10.0, 12.0)));
        assert_eq!(resolve_origin(&host, parent), None);
    }

    #[test]
    fn candidate_tracks_pointer_minus_anchor() {
        let origin = Pos2::new(10.0, 10.0);
        let anchor = pointer_anchor(Pos2::new(60.0, 60.0), origin);
        assert_eq!(anchor, Vec2::new(50.0, 50.0));

        let pos = candidate(Pos2::new(260.0, 75.0), anchor, origin, AxisFlags::default());
        assert_eq!(pos, Pos2::new(210.0, 25.0));
    }

    #[test]
    fn locked_axis_stays_at_origin() {
        let origin = Pos2::new(10.0, 20.0);
        let anchor = Vec2::new(5.0, 5.0);
        let axes = AxisFlags { x: false, y: true };

        let pos = candidate(Pos2::new(500.0, 100.0), anchor, origin, axes);
        assert_eq!(pos, Pos2::new(10.0, 95.0));
    }
}
