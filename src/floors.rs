use crate::options::{FloorAxis, FloorMapping};
use crate::types::Point3;

/// Infer the floor a free-roaming position is on.
///
/// Only needed for the visitor's own position; catalog entries carry an
/// explicit floor. The result is always within
/// `[mapping.min_floor, mapping.max_floor]`.
pub fn resolve_floor(position: &Point3, mapping: &FloorMapping) -> u32 {
    let (lo, hi) = floor_range(mapping);

    let coordinate = match mapping.axis {
        FloorAxis::X => position.x,
        FloorAxis::Y => position.y,
        FloorAxis::Z => position.z,
    };
    let spacing = if mapping.spacing.is_finite() && mapping.spacing > 0.0 {
        mapping.spacing
    } else {
        1.0
    };

    let raw = (coordinate / spacing).floor() + 1.0;
    if raw.is_nan() {
        log::warn!("cannot infer floor from {coordinate}, using floor {lo}");
        return lo;
    }

    // `as` saturates, so infinities land on the range edges below.
    let floor = raw.clamp(lo as f64, hi as f64) as u32;
    if raw < lo as f64 || raw > hi as f64 {
        log::warn!("inferred floor {raw} outside [{lo}, {hi}], clamped to {floor}");
    } else {
        log::trace!("position {position:?} resolved to floor {floor}");
    }
    floor
}

pub fn is_on_floor(position: &Point3, floor: u32, mapping: &FloorMapping) -> bool {
    resolve_floor(position, mapping) == floor
}

fn floor_range(mapping: &FloorMapping) -> (u32, u32) {
    if mapping.min_floor <= mapping.max_floor {
        (mapping.min_floor, mapping.max_floor)
    } else {
        (mapping.max_floor, mapping.min_floor)
    }
}
