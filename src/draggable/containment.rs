use egui::{Pos2, Vec2};

use super::types::{Axis, AxisPolicies, Bounds, ClampPolicy};

/// Clamp a candidate position (in boundary-local coordinates) into the containment region.
pub fn clamp_to_boundary(
    candidate: Pos2,
    element_size: Vec2,
    boundary_size: Vec2,
    policy: AxisPolicies,
    bounds: &Bounds,
) -> Pos2 {
    egui::pos2(
        clamp_axis(
            candidate.x,
            element_size.x,
            boundary_size.x,
            policy.x,
            bounds.min(Axis::X),
            bounds.max(Axis::X),
        ),
        clamp_axis(
            candidate.y,
            element_size.y,
            boundary_size.y,
            policy.y,
            bounds.min(Axis::Y),
            bounds.max(Axis::Y),
        ),
    )
}

/// One axis of [`clamp_to_boundary`].
///
/// `min` replaces the lower clamp value. `max` replaces the far edge (normally
/// `boundary_size`) the trailing side of the element is compared against, and the clamped
/// value becomes `max - element_size`. Overrides win over [`ClampPolicy::MidpointAligned`].
///
/// The lower edge is applied last: an element larger than its boundary ends up pinned there.
pub fn clamp_axis(
    candidate: f32,
    element_size: f32,
    boundary_size: f32,
    policy: ClampPolicy,
    min: Option<f32>,
    max: Option<f32>,
) -> f32 {
    let overhang = match policy {
        ClampPolicy::EdgeAligned => 0.0,
        ClampPolicy::MidpointAligned => element_size / 2.0,
    };

    let lower = min.unwrap_or(-overhang);
    let far_limit = max.unwrap_or(boundary_size + overhang);
    let upper = far_limit - element_size;

    let far_edge = candidate + element_size;
    let mut value = candidate;
    if far_edge >= far_limit {
        value = upper;
    }
    if value <= lower {
        value = lower;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDGE: ClampPolicy = ClampPolicy::EdgeAligned;
    const MID: ClampPolicy = ClampPolicy::MidpointAligned;

    #[test]
    fn edge_mode_keeps_element_inside() {
        assert_eq!(clamp_axis(210.0, 50.0, 200.0, EDGE, None, None), 150.0);
        assert_eq!(clamp_axis(-30.0, 50.0, 200.0, EDGE, None, None), 0.0);
        assert_eq!(clamp_axis(75.0, 50.0, 200.0, EDGE, None, None), 75.0);
    }

    #[test]
    fn edge_mode_range_holds_for_many_candidates() {
        for i in -100..=400 {
            let v = clamp_axis(i as f32, 40.0, 240.0, EDGE, None, None);
            assert!((0.0..=200.0).contains(&v), "candidate {i} -> {v}");
        }
    }

    #[test]
    fn midpoint_mode_lets_half_the_element_hang_out() {
        assert_eq!(clamp_axis(-100.0, 50.0, 200.0, MID, None, None), -25.0);
        assert_eq!(clamp_axis(500.0, 50.0, 200.0, MID, None, None), 175.0);
        assert_eq!(clamp_axis(-10.0, 50.0, 200.0, MID, None, None), -10.0);
        assert_eq!(clamp_axis(170.0, 50.0, 200.0, MID, None, None), 170.0);
    }

    #[test]
    fn min_override_replaces_lower_bound() {
        assert_eq!(clamp_axis(3.0, 50.0, 200.0, EDGE, Some(20.0), None), 20.0);
        // Wins over midpoint mode too.
        assert_eq!(clamp_axis(-40.0, 50.0, 200.0, MID, Some(-5.0), None), -5.0);
    }

    #[test]
    fn max_override_moves_the_far_edge() {
        // Far edge limited to 120: the element may go as far as 120 - 50.
        assert_eq!(clamp_axis(100.0, 50.0, 200.0, EDGE, None, Some(120.0)), 70.0);
        assert_eq!(clamp_axis(60.0, 50.0, 200.0, EDGE, None, Some(120.0)), 60.0);
        assert_eq!(clamp_axis(300.0, 50.0, 200.0, MID, None, Some(120.0)), 70.0);
    }

    #[test]
    fn oversized_element_is_pinned_to_lower_edge() {
        assert_eq!(clamp_axis(-10.0, 300.0, 200.0, EDGE, None, None), 0.0);
        assert_eq!(clamp_axis(40.0, 300.0, 200.0, EDGE, None, None), 0.0);
    }

    #[test]
    fn zero_sized_boundary_degrades_to_pinning() {
        assert_eq!(clamp_axis(12.0, 0.0, 0.0, EDGE, None, None), 0.0);
    }

    #[test]
    fn axes_use_their_own_policy_and_bounds() {
        let bounds = Bounds {
            min_top: Some(10.0),
            ..Default::default()
        };
        let policy = AxisPolicies { x: MID, y: EDGE };
        let clamped = clamp_to_boundary(
            Pos2::new(-100.0, 0.0),
            Vec2::new(40.0, 20.0),
            Vec2::new(200.0, 100.0),
            policy,
            &bounds,
        );
        assert_eq!(clamped, Pos2::new(-20.0, 10.0));
    }
}
