use serde::{Deserialize, Serialize};

/// A position in the mall's logical 3D space.
///
/// `x` and `z` span the floor plan; `y` is height and only matters for
/// floor inference.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Midpoint in the horizontal plane, dropped onto `y = 0`.
    pub fn plan_midpoint(&self, other: &Point3) -> Point3 {
        Point3 {
            x: (self.x + other.x) / 2.0,
            y: 0.0,
            z: (self.z + other.z) / 2.0,
        }
    }
}

/// A position on the floor-plan surface, in percent of its width/height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
}

impl DisplayPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale to a pixel position on a surface of the given size.
    pub fn to_pixels(&self, width: f64, height: f64) -> (f64, f64) {
        (self.x / 100.0 * width, self.y / 100.0 * height)
    }

    /// Build a percentage point from a pixel position, clamped to the surface.
    pub fn from_pixels(px: f64, py: f64, width: f64, height: f64) -> Self {
        Self {
            x: pixel_axis_to_percent(px, width),
            y: pixel_axis_to_percent(py, height),
        }
    }
}

fn pixel_axis_to_percent(value: f64, extent: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    (value / extent * 100.0).clamp(0.0, 100.0)
}

/// Facility types known to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityKind {
    Elevator,
    Toilet,
    Parking,
    Entrance,
}

impl FacilityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elevator => "elevator",
            Self::Toilet => "toilet",
            Self::Parking => "parking",
            Self::Entrance => "entrance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub floor: u32,
    pub position: Point3,
    pub category: String,
    pub description: String,
    pub opening_hours: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub floor: u32,
    pub position: Point3,
    #[serde(rename = "type")]
    pub kind: FacilityKind,
    pub description: String,
}

/// Anything that can be shown on the map and routed to.
pub trait Landmark {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn floor(&self) -> u32;
    fn position(&self) -> &Point3;
    fn description(&self) -> &str;
    /// Store category or facility type, as shown next to the name.
    fn label(&self) -> &str;
}

impl Landmark for Store {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn floor(&self) -> u32 {
        self.floor
    }
    fn position(&self) -> &Point3 {
        &self.position
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn label(&self) -> &str {
        &self.category
    }
}

impl Landmark for Facility {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn floor(&self) -> u32 {
        self.floor
    }
    fn position(&self) -> &Point3 {
        &self.position
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn label(&self) -> &str {
        self.kind.as_str()
    }
}

/// A route target. The `kind` tag is explicit on the wire:
/// `{"kind": "store", ...}` or `{"kind": "facility", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Destination {
    Store(Store),
    Facility(Facility),
}

impl Destination {
    fn inner(&self) -> &dyn Landmark {
        match self {
            Self::Store(s) => s,
            Self::Facility(f) => f,
        }
    }

    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Store(_) => "store",
            Self::Facility(_) => "facility",
        }
    }
}

impl Landmark for Destination {
    fn id(&self) -> &str {
        self.inner().id()
    }
    fn name(&self) -> &str {
        self.inner().name()
    }
    fn floor(&self) -> u32 {
        self.inner().floor()
    }
    fn position(&self) -> &Point3 {
        self.inner().position()
    }
    fn description(&self) -> &str {
        self.inner().description()
    }
    fn label(&self) -> &str {
        self.inner().label()
    }
}

impl From<Store> for Destination {
    fn from(store: Store) -> Self {
        Self::Store(store)
    }
}

impl From<Facility> for Destination {
    fn from(facility: Facility) -> Self {
        Self::Facility(facility)
    }
}

/// Compass heading of a walking step. North is decreasing `z` unless
/// configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

/// Icon tag the presentation layer maps to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepIcon {
    Start,
    Elevator,
    TurnLeft,
    TurnRight,
    Forward,
    Backward,
    Restaurant,
    ShoppingBag,
    Store,
    Toilet,
    Parking,
    Entrance,
}

/// One line of the directions list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationStep {
    pub instruction: String,
    pub icon: StepIcon,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<Heading>,
    pub distance: f64,
    pub cumulative_distance: f64,
}

/// A computed route from the visitor to a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub destination_id: String,
    pub origin_floor: u32,
    pub destination_floor: u32,
    /// Logical-space polyline: origin, plan midpoint, destination.
    pub waypoints: Vec<Point3>,
    /// The same polyline projected onto the floor plan.
    pub display_path: Vec<DisplayPoint>,
    pub steps: Vec<NavigationStep>,
    pub total_distance: f64,
    pub estimated_minutes: u32,
    pub estimated_time: String,
}

impl Route {
    pub fn changes_floor(&self) -> bool {
        self.origin_floor != self.destination_floor
    }
}
