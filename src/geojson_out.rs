//! GeoJSON views for map renderers. Coordinates are floor-plan percentages
//! `[x, y]`, not longitude/latitude.

use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};

use crate::mapper::to_display_space;
use crate::options::SpaceBounds;
use crate::types::*;

/// The route line plus origin and destination points.
pub fn route_to_feature_collection(route: &Route) -> FeatureCollection {
    let mut features = Vec::new();

    if route.display_path.len() >= 2 {
        let coords: Vec<Vec<f64>> = route.display_path.iter().map(display_coords).collect();
        let mut props = Map::new();
        props.insert("role".to_string(), JsonValue::String("path".to_string()));
        props.insert(
            "destinationId".to_string(),
            JsonValue::String(route.destination_id.clone()),
        );
        insert_number(&mut props, "totalDistance", route.total_distance);
        props.insert(
            "estimatedTime".to_string(),
            JsonValue::String(route.estimated_time.clone()),
        );
        props.insert(
            "instructions".to_string(),
            JsonValue::Array(
                route
                    .steps
                    .iter()
                    .map(|s| JsonValue::String(s.instruction.clone()))
                    .collect(),
            ),
        );
        features.push(feature(Value::LineString(coords), props));
    }

    if let Some(first) = route.display_path.first() {
        features.push(endpoint_feature(first, "origin", route.origin_floor));
    }
    if let Some(last) = route.display_path.last() {
        features.push(endpoint_feature(last, "destination", route.destination_floor));
    }

    collection(features)
}

/// One marker per store or facility, projected onto the floor plan.
pub fn markers_to_feature_collection(
    items: &[Destination],
    bounds: &SpaceBounds,
) -> FeatureCollection {
    let features = items
        .iter()
        .map(|item| {
            let point = to_display_space(item.position(), bounds);
            let mut props = Map::new();
            props.insert("id".to_string(), JsonValue::String(item.id().to_string()));
            props.insert(
                "name".to_string(),
                JsonValue::String(item.name().to_string()),
            );
            props.insert(
                "kind".to_string(),
                JsonValue::String(item.kind_str().to_string()),
            );
            props.insert("floor".to_string(), JsonValue::Number(item.floor().into()));
            match item {
                Destination::Store(s) => {
                    props.insert("category".to_string(), JsonValue::String(s.category.clone()));
                    if let Some(rating) = s.rating {
                        insert_number(&mut props, "rating", f64::from(rating));
                    }
                }
                Destination::Facility(f) => {
                    props.insert(
                        "type".to_string(),
                        JsonValue::String(f.kind.as_str().to_string()),
                    );
                }
            }
            feature(Value::Point(display_coords(&point)), props)
        })
        .collect();

    collection(features)
}

fn endpoint_feature(point: &DisplayPoint, role: &str, floor: u32) -> Feature {
    let mut props = Map::new();
    props.insert("role".to_string(), JsonValue::String(role.to_string()));
    props.insert("floor".to_string(), JsonValue::Number(floor.into()));
    feature(Value::Point(display_coords(point)), props)
}

fn feature(value: Value, props: Map<String, JsonValue>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn display_coords(point: &DisplayPoint) -> Vec<f64> {
    vec![point.x, point.y]
}

fn insert_number(props: &mut Map<String, JsonValue>, key: &str, value: f64) {
    props.insert(
        key.to_string(),
        JsonValue::Number(serde_json::Number::from_f64(value).unwrap_or(0.into())),
    );
}
