use crate::options::SpaceBounds;
use crate::types::{DisplayPoint, Point3};

/// Project a logical position onto the floor plan, in percent.
///
/// Logical `x` maps to display `x` and logical `z` to display `y`.
/// Positions outside `bounds` are clamped to the plan edge.
pub fn to_display_space(position: &Point3, bounds: &SpaceBounds) -> DisplayPoint {
    if !bounds.contains(position.x, position.z) {
        log::trace!("position {position:?} outside plan bounds, clamping to edge");
    }
    DisplayPoint {
        x: normalize_axis(position.x, bounds.min_x, bounds.max_x),
        y: normalize_axis(position.z, bounds.min_z, bounds.max_z),
    }
}

/// Inverse of [`to_display_space`]. The result lies on the floor plane (`y = 0`).
pub fn to_logical_space(point: &DisplayPoint, bounds: &SpaceBounds) -> Point3 {
    Point3 {
        x: denormalize_axis(point.x, bounds.min_x, bounds.max_x),
        y: 0.0,
        z: denormalize_axis(point.y, bounds.min_z, bounds.max_z),
    }
}

/// Project a whole polyline.
pub fn project_path(points: &[Point3], bounds: &SpaceBounds) -> Vec<DisplayPoint> {
    points
        .iter()
        .map(|pt| to_display_space(pt, bounds))
        .collect()
}

fn normalize_axis(value: f64, axis_min: f64, axis_max: f64) -> f64 {
    let span = axis_max - axis_min;
    if !span.is_finite() || span.abs() < f64::EPSILON {
        log::warn!("degenerate logical axis [{axis_min}, {axis_max}], centring marker");
        return 50.0;
    }
    ((value - axis_min) / span * 100.0).clamp(0.0, 100.0)
}

fn denormalize_axis(percent: f64, axis_min: f64, axis_max: f64) -> f64 {
    axis_min + percent.clamp(0.0, 100.0) / 100.0 * (axis_max - axis_min)
}
