use serde::Deserialize;

/// Tunables for mapping, floor lookup and route synthesis.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WayfindingOptions {
    /// Logical extent of the floor plan (default: [-15, 15] on x and z)
    #[serde(default)]
    pub bounds: SpaceBounds,

    /// Walking speed in distance units per second (default: 1.4)
    #[serde(default = "default_walking_speed")]
    pub walking_speed: f64,

    /// Flat distance charged for taking the elevator (default: 5)
    #[serde(default = "default_floor_change_distance")]
    pub floor_change_distance: f64,

    /// Minimum offset along an axis before a walking step is emitted (default: 2)
    #[serde(default = "default_direction_threshold")]
    pub direction_threshold: f64,

    /// Treat decreasing z as north (default: true). Set to false for plans
    /// drawn with north towards increasing z.
    #[serde(default = "default_true")]
    pub north_is_negative_z: bool,

    /// How floors are inferred from a free-roaming position
    #[serde(default)]
    pub floors: FloorMapping,
}

impl Default for WayfindingOptions {
    fn default() -> Self {
        Self {
            bounds: SpaceBounds::default(),
            walking_speed: default_walking_speed(),
            floor_change_distance: default_floor_change_distance(),
            direction_threshold: default_direction_threshold(),
            north_is_negative_z: true,
            floors: FloorMapping::default(),
        }
    }
}

/// Axis-aligned logical bounds of one floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl SpaceBounds {
    pub fn new(min_x: f64, max_x: f64, min_z: f64, max_z: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Same half-extent on both axes, centred on the origin.
    pub fn symmetric(half_extent: f64) -> Self {
        Self::new(-half_extent, half_extent, -half_extent, half_extent)
    }

    pub fn contains(&self, x: f64, z: f64) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }
}

impl Default for SpaceBounds {
    fn default() -> Self {
        Self::symmetric(15.0)
    }
}

/// Coordinate axis a floor index is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorAxis {
    X,
    Y,
    Z,
}

/// `floor = clamp(floor(axis / spacing) + 1, min_floor, max_floor)`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorMapping {
    #[serde(default = "default_floor_axis")]
    pub axis: FloorAxis,

    /// Height of one storey along `axis` (default: 1)
    #[serde(default = "default_floor_spacing")]
    pub spacing: f64,

    #[serde(default = "default_min_floor")]
    pub min_floor: u32,

    #[serde(default = "default_max_floor")]
    pub max_floor: u32,
}

impl Default for FloorMapping {
    fn default() -> Self {
        Self {
            axis: default_floor_axis(),
            spacing: default_floor_spacing(),
            min_floor: default_min_floor(),
            max_floor: default_max_floor(),
        }
    }
}

impl FloorMapping {
    /// Valid floors, lowest first.
    pub fn levels(&self) -> Vec<u32> {
        (self.min_floor..=self.max_floor).collect()
    }
}

fn default_walking_speed() -> f64 {
    1.4
}

fn default_floor_change_distance() -> f64 {
    5.0
}

fn default_direction_threshold() -> f64 {
    2.0
}

fn default_floor_axis() -> FloorAxis {
    FloorAxis::Y
}

fn default_floor_spacing() -> f64 {
    1.0
}

fn default_min_floor() -> u32 {
    1
}

fn default_max_floor() -> u32 {
    3
}

fn default_true() -> bool {
    true
}
