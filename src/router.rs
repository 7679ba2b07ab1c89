//! Direct-path route synthesis.
//!
//! There is no walkable-area graph, so every route is the straight line
//! origin → plan midpoint → destination, described as at most one
//! east/west leg and one north/south leg.

use crate::floors::resolve_floor;
use crate::mapper::project_path;
use crate::options::WayfindingOptions;
use crate::types::*;

/// Build the route from the visitor's position to `destination`.
///
/// Never fails: coincident points give a start/arrive route of zero length.
pub fn compute_route(
    origin: &Point3,
    destination: &Destination,
    opts: &WayfindingOptions,
) -> Route {
    let target = destination.position();
    let origin_floor = resolve_floor(origin, &opts.floors);
    let destination_floor = destination.floor();

    let waypoints = vec![*origin, origin.plan_midpoint(target), *target];
    let display_path = project_path(&waypoints, &opts.bounds);

    let mut steps = StepList::default();
    steps.push(
        "Start from your current position".to_string(),
        StepIcon::Start,
        format!("You are on floor {origin_floor}"),
        None,
        0.0,
    );

    if destination_floor != origin_floor {
        steps.push(
            format!("Take the elevator to floor {destination_floor}"),
            StepIcon::Elevator,
            "The nearest elevator is located at the center of the mall".to_string(),
            None,
            opts.floor_change_distance.max(0.0),
        );
    }

    // NaN and negative thresholds collapse to 0.
    let threshold = opts.direction_threshold.max(0.0);

    let dx = target.x - origin.x;
    if dx.abs() > threshold {
        let (heading, turn, icon) = if dx > 0.0 {
            (Heading::East, "right", StepIcon::TurnRight)
        } else {
            (Heading::West, "left", StepIcon::TurnLeft)
        };
        let distance = dx.abs().round();
        steps.push(
            format!("Turn {turn} and walk straight"),
            icon,
            format!("Walk {} {}", meters(distance), heading.as_str()),
            Some(heading),
            distance,
        );
    }

    let dz = target.z - origin.z;
    if dz.abs() > threshold {
        let heading = north_south(dz, opts.north_is_negative_z);
        let (verb, icon) = match heading {
            Heading::North => ("Go forward", StepIcon::Forward),
            _ => ("Head back", StepIcon::Backward),
        };
        let distance = dz.abs().round();
        steps.push(
            format!("{verb} toward {}", approach_target(destination)),
            icon,
            format!("Walk {} {}", meters(distance), heading.as_str()),
            Some(heading),
            distance,
        );
    }

    steps.push(
        format!("Arrive at {}", destination.name()),
        arrival_icon(destination),
        format!("{} - {}", destination.label(), destination.description()),
        None,
        0.0,
    );

    let total_distance = steps.total;
    let estimated_minutes = estimate_minutes(total_distance, opts.walking_speed);

    log::debug!(
        "route to '{}' ({}): {} steps, {} units, {} min",
        destination.name(),
        destination.id(),
        steps.items.len(),
        total_distance,
        estimated_minutes
    );

    Route {
        destination_id: destination.id().to_string(),
        origin_floor,
        destination_floor,
        waypoints,
        display_path,
        steps: steps.items,
        total_distance,
        estimated_minutes,
        estimated_time: format_minutes(estimated_minutes),
    }
}

/// Walking time in whole minutes, never less than one.
pub fn estimate_minutes(distance: f64, walking_speed: f64) -> u32 {
    if !walking_speed.is_finite() || walking_speed <= 0.0 {
        log::warn!("walking speed {walking_speed} is not usable, reporting minimum time");
        return 1;
    }
    let minutes = (distance.max(0.0) / walking_speed / 60.0).ceil();
    if minutes.is_nan() {
        return 1;
    }
    (minutes as u32).max(1)
}

/// "1 minute", "4 minutes".
pub fn format_minutes(minutes: u32) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}

#[derive(Default)]
struct StepList {
    items: Vec<NavigationStep>,
    total: f64,
}

impl StepList {
    fn push(
        &mut self,
        instruction: String,
        icon: StepIcon,
        details: String,
        heading: Option<Heading>,
        distance: f64,
    ) {
        self.total += distance;
        self.items.push(NavigationStep {
            instruction,
            icon,
            details,
            heading,
            distance,
            cumulative_distance: self.total,
        });
    }
}

fn north_south(dz: f64, north_is_negative_z: bool) -> Heading {
    if (dz < 0.0) == north_is_negative_z {
        Heading::North
    } else {
        Heading::South
    }
}

fn meters(distance: f64) -> String {
    if distance == 1.0 {
        "1 meter".to_string()
    } else {
        format!("{distance} meters")
    }
}

/// Stores are approached by name, facilities by their type.
fn approach_target(destination: &Destination) -> &str {
    match destination {
        Destination::Store(s) => &s.name,
        Destination::Facility(f) => f.kind.as_str(),
    }
}

fn arrival_icon(destination: &Destination) -> StepIcon {
    match destination {
        Destination::Store(s) => match s.category.to_lowercase().as_str() {
            "restaurant" => StepIcon::Restaurant,
            "fashion" => StepIcon::ShoppingBag,
            _ => StepIcon::Store,
        },
        Destination::Facility(f) => match f.kind {
            FacilityKind::Elevator => StepIcon::Elevator,
            FacilityKind::Toilet => StepIcon::Toilet,
            FacilityKind::Parking => StepIcon::Parking,
            FacilityKind::Entrance => StepIcon::Entrance,
        },
    }
}
