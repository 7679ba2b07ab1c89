use serde::{Deserialize, Serialize};

use crate::error::WayfinderError;
use crate::options::WayfindingOptions;
use crate::router::compute_route;
use crate::types::*;

type Result<T> = std::result::Result<T, WayfinderError>;

/// The read-only set of stores and facilities shown on the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub stores: Vec<Store>,
    #[serde(default)]
    pub facilities: Vec<Facility>,
}

/// One tab of the floor selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorSummary {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub stores: Vec<String>,
    pub facilities: Vec<String>,
    pub map_image: String,
}

/// Filters applied by the search panel. Empty sets do not filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub floors: Vec<u32>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Catalog {
    /// Parse a catalog from `{"stores": [...], "facilities": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a store or facility by id. Stores win on a clash.
    pub fn find(&self, id: &str) -> Option<Destination> {
        self.stores
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .map(Destination::Store)
            .or_else(|| {
                self.facilities
                    .iter()
                    .find(|f| f.id == id)
                    .cloned()
                    .map(Destination::Facility)
            })
    }

    /// Everything placed on `floor`, stores first.
    pub fn on_floor(&self, floor: u32) -> Vec<Destination> {
        self.stores
            .iter()
            .filter(|s| s.floor == floor)
            .cloned()
            .map(Destination::Store)
            .chain(
                self.facilities
                    .iter()
                    .filter(|f| f.floor == floor)
                    .cloned()
                    .map(Destination::Facility),
            )
            .collect()
    }

    pub fn floors(&self, levels: &[u32]) -> Vec<FloorSummary> {
        levels
            .iter()
            .map(|&level| FloorSummary {
                id: format!("floor-{level}"),
                name: format!("Floor {level}"),
                level,
                stores: self
                    .stores
                    .iter()
                    .filter(|s| s.floor == level)
                    .map(|s| s.id.clone())
                    .collect(),
                facilities: self
                    .facilities
                    .iter()
                    .filter(|f| f.floor == level)
                    .map(|f| f.id.clone())
                    .collect(),
                map_image: format!("/images/floor-{level}.svg"),
            })
            .collect()
    }

    /// Distinct store categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.stores.iter().map(|s| s.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<Destination> {
        let needle = query.text.to_lowercase();
        let floor_ok = |floor: u32| query.floors.is_empty() || query.floors.contains(&floor);

        let stores = self
            .stores
            .iter()
            .filter(|s| {
                matches_text(&needle, &s.name, &s.category)
                    && floor_ok(s.floor)
                    && (query.categories.is_empty() || query.categories.contains(&s.category))
            })
            .cloned()
            .map(Destination::Store);

        let facilities = self
            .facilities
            .iter()
            .filter(|f| matches_text(&needle, &f.name, f.kind.as_str()) && floor_ok(f.floor))
            .cloned()
            .map(Destination::Facility);

        stores.chain(facilities).collect()
    }

    /// The demo mall: three floors and an underground car park.
    pub fn sample() -> Self {
        Self {
            stores: vec![
                sample_store(
                    "1",
                    "Gogi House",
                    1,
                    Point3::new(5.0, 0.0, 3.0),
                    "Restaurant",
                    "Korean BBQ restaurant with premium meat selection",
                    "10:00 - 22:00",
                ),
                sample_store(
                    "2",
                    "Dooki",
                    1,
                    Point3::new(-3.0, 0.0, 2.0),
                    "Fashion",
                    "Trendy clothing store for young adults",
                    "09:00 - 22:00",
                ),
                sample_store(
                    "3",
                    "KFC",
                    2,
                    Point3::new(2.0, 0.0, 4.0),
                    "Fast Food",
                    "Popular fast food chain serving fried chicken",
                    "08:00 - 23:00",
                ),
                sample_store(
                    "4",
                    "Mothercare",
                    3,
                    Point3::new(-4.0, 0.0, 1.0),
                    "Baby Care",
                    "Specialized store for baby and maternity products",
                    "09:30 - 21:30",
                ),
            ],
            facilities: vec![
                sample_facility(
                    "f1",
                    "Elevator A",
                    1,
                    Point3::new(0.0, 0.0, 0.0),
                    FacilityKind::Elevator,
                    "Main elevator connecting all floors",
                ),
                sample_facility(
                    "f2",
                    "Women's Toilet",
                    1,
                    Point3::new(3.0, 0.0, -2.0),
                    FacilityKind::Toilet,
                    "Clean and spacious women's restroom",
                ),
                sample_facility(
                    "f3",
                    "Men's Toilet",
                    1,
                    Point3::new(-3.0, 0.0, -2.0),
                    FacilityKind::Toilet,
                    "Clean and spacious men's restroom",
                ),
                sample_facility(
                    "f4",
                    "Main Entrance",
                    1,
                    Point3::new(0.0, 0.0, 5.0),
                    FacilityKind::Entrance,
                    "Main entrance to the mall",
                ),
                sample_facility(
                    "f5",
                    "Parking Level 1",
                    0,
                    Point3::new(0.0, -1.0, 0.0),
                    FacilityKind::Parking,
                    "Underground parking level 1",
                ),
            ],
        }
    }
}

/// Route from `origin` to the catalog entry `id`, or `None` when the id is
/// unknown (no active route).
pub fn route_to(
    catalog: &Catalog,
    id: &str,
    origin: &Point3,
    opts: &WayfindingOptions,
) -> Option<Route> {
    match catalog.find(id) {
        Some(dest) => Some(compute_route(origin, &dest, opts)),
        None => {
            log::debug!("no catalog entry '{id}', no route");
            None
        }
    }
}

fn matches_text(needle: &str, name: &str, label: &str) -> bool {
    needle.is_empty()
        || name.to_lowercase().contains(needle)
        || label.to_lowercase().contains(needle)
}

fn sample_store(
    id: &str,
    name: &str,
    floor: u32,
    position: Point3,
    category: &str,
    description: &str,
    opening_hours: &str,
) -> Store {
    Store {
        id: id.to_string(),
        name: name.to_string(),
        floor,
        position,
        category: category.to_string(),
        description: description.to_string(),
        opening_hours: opening_hours.to_string(),
        rating: None,
        phone: None,
    }
}

fn sample_facility(
    id: &str,
    name: &str,
    floor: u32,
    position: Point3,
    kind: FacilityKind,
    description: &str,
) -> Facility {
    Facility {
        id: id.to_string(),
        name: name.to_string(),
        floor,
        position,
        kind,
        description: description.to_string(),
    }
}
