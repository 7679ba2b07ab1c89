use geojson::Value;
use mall_wayfinder_wasm::catalog::{Catalog, SearchQuery, route_to};
use mall_wayfinder_wasm::floors::resolve_floor;
use mall_wayfinder_wasm::geojson_out::{markers_to_feature_collection, route_to_feature_collection};
use mall_wayfinder_wasm::mapper::{to_display_space, to_logical_space};
use mall_wayfinder_wasm::options::WayfindingOptions;
use mall_wayfinder_wasm::router::compute_route;
use mall_wayfinder_wasm::types::{Destination, Heading, Landmark, Point3, StepIcon};

fn load_catalog() -> Catalog {
    let json = std::fs::read_to_string("tests/fixtures/catalog/mall.json").unwrap();
    Catalog::from_json(&json).unwrap()
}

// ---- catalog ----

#[test]
fn test_fixture_catalog_loads() {
    let catalog = load_catalog();
    assert_eq!(catalog.stores.len(), 3);
    assert_eq!(catalog.facilities.len(), 2);

    let cafe = catalog.find("s3").unwrap();
    match &cafe {
        Destination::Store(s) => {
            assert_eq!(s.rating, Some(4.5));
            assert_eq!(s.phone.as_deref(), Some("+84 28 3822 0000"));
        }
        _ => panic!("Expected store"),
    }
}

#[test]
fn test_visitor_walks_to_every_catalog_entry() {
    let catalog = Catalog::sample();
    let origin = Point3::new(0.0, 0.0, 8.0);
    let opts = WayfindingOptions::default();

    for id in ["1", "2", "3", "4", "f1", "f2", "f3", "f4", "f5"] {
        let route = route_to(&catalog, id, &origin, &opts).unwrap();
        assert_eq!(route.steps.first().unwrap().icon, StepIcon::Start);
        assert!(route.steps.last().unwrap().instruction.starts_with("Arrive at "));
        let sum: f64 = route.steps.iter().map(|s| s.distance).sum();
        assert_eq!(route.total_distance, sum);
        assert!(route.estimated_minutes >= 1);
    }
}

#[test]
fn test_parking_below_ground_still_asks_for_elevator() {
    // The car park is floor 0, below the lowest inferable floor.
    let catalog = Catalog::sample();
    let route = route_to(
        &catalog,
        "f5",
        &Point3::new(0.0, 0.0, 0.0),
        &WayfindingOptions::default(),
    )
    .unwrap();

    assert_eq!(route.origin_floor, 1);
    assert_eq!(route.destination_floor, 0);
    assert_eq!(route.steps[1].instruction, "Take the elevator to floor 0");
    assert_eq!(route.steps.last().unwrap().icon, StepIcon::Parking);
    assert_eq!(route.total_distance, 5.0);
}

#[test]
fn test_unknown_destination_is_no_route() {
    let catalog = load_catalog();
    let route = route_to(
        &catalog,
        "does-not-exist",
        &Point3::default(),
        &WayfindingOptions::default(),
    );
    assert!(route.is_none());
}

#[test]
fn test_search_then_route() {
    let catalog = load_catalog();
    let hits = catalog.search(&SearchQuery {
        text: "coffee".to_string(),
        ..Default::default()
    });
    assert_eq!(hits.len(), 1);

    let route = compute_route(
        &Point3::new(0.0, 1.0, 0.0),
        &hits[0],
        &WayfindingOptions::default(),
    );
    assert_eq!(route.destination_id, "s3");
    assert!(!route.changes_floor());
}

// ---- coordinate conventions ----

#[test]
fn test_small_plan_convention() {
    let opts: WayfindingOptions = serde_json::from_str(
        r#"{"bounds": {"minX": -5, "maxX": 5, "minZ": -5, "maxZ": 5}}"#,
    )
    .unwrap();
    let catalog = Catalog::sample();

    for item in catalog.on_floor(1) {
        let p = to_display_space(item.position(), &opts.bounds);
        assert!((0.0..=100.0).contains(&p.x));
        assert!((0.0..=100.0).contains(&p.y));

        let back = to_logical_space(&p, &opts.bounds);
        assert!((back.x - item.position().x).abs() < 1e-9);
        assert!((back.z - item.position().z).abs() < 1e-9);
    }
}

#[test]
fn test_percentage_ready_convention() {
    let opts: WayfindingOptions = serde_json::from_str(
        r#"{"bounds": {"minX": 0, "maxX": 100, "minZ": 0, "maxZ": 100}}"#,
    )
    .unwrap();
    let p = to_display_space(&Point3::new(37.5, 0.0, 62.5), &opts.bounds);
    assert!((p.x - 37.5).abs() < 1e-9);
    assert!((p.y - 62.5).abs() < 1e-9);
}

#[test]
fn test_floor_inferred_from_z_like_the_click_handler() {
    let opts: WayfindingOptions =
        serde_json::from_str(r#"{"floors": {"axis": "z"}}"#).unwrap();
    assert_eq!(resolve_floor(&Point3::new(0.0, 0.0, 0.4), &opts.floors), 1);
    assert_eq!(resolve_floor(&Point3::new(0.0, 0.0, 1.4), &opts.floors), 2);
    assert_eq!(resolve_floor(&Point3::new(0.0, 0.0, 8.0), &opts.floors), 3);
    assert_eq!(resolve_floor(&Point3::new(0.0, 0.0, -8.0), &opts.floors), 1);
}

#[test]
fn test_direction_signs() {
    let opts = WayfindingOptions::default();
    let catalog = load_catalog();
    let dest = catalog.find("s1").unwrap();
    let target = *dest.position();

    let from_west = Point3::new(target.x - 5.0, 0.0, target.z);
    let from_east = Point3::new(target.x + 5.0, 0.0, target.z);
    let nearby = Point3::new(target.x + 1.5, 0.0, target.z - 1.5);

    let east = compute_route(&from_west, &dest, &opts);
    assert_eq!(east.steps[1].heading, Some(Heading::East));

    let west = compute_route(&from_east, &dest, &opts);
    assert_eq!(west.steps[1].heading, Some(Heading::West));

    let close = compute_route(&nearby, &dest, &opts);
    assert!(close.steps.iter().all(|s| s.heading.is_none()));
    assert_eq!(close.steps.len(), 2);
}

// ---- geojson ----

#[test]
fn test_route_geojson_matches_display_path() {
    let catalog = load_catalog();
    let dest = catalog.find("s2").unwrap();
    let route = compute_route(
        &Point3::new(-10.0, 0.0, 10.0),
        &dest,
        &WayfindingOptions::default(),
    );
    let fc = route_to_feature_collection(&route);

    let geom = fc.features[0].geometry.as_ref().unwrap();
    if let Value::LineString(coords) = &geom.value {
        assert_eq!(coords.len(), route.display_path.len());
        for (c, p) in coords.iter().zip(&route.display_path) {
            assert_eq!(c, &vec![p.x, p.y]);
        }
    } else {
        panic!("Expected LineString");
    }
}

#[test]
fn test_floor_markers_geojson() {
    let catalog = load_catalog();
    let opts = WayfindingOptions::default();
    let fc = markers_to_feature_collection(&catalog.on_floor(2), &opts.bounds);

    let names: Vec<&str> = fc
        .features
        .iter()
        .map(|f| f.properties.as_ref().unwrap()["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Highlands Coffee", "Restroom B"]);

    let cafe = fc.features[0].properties.as_ref().unwrap();
    assert_eq!(cafe["rating"], 4.5);
}
