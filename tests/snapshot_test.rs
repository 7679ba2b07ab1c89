use mall_wayfinder_wasm::options::WayfindingOptions;
use mall_wayfinder_wasm::router::compute_route;
use mall_wayfinder_wasm::types::{Destination, Point3};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct RouteCase {
    origin: Point3,
    destination: Destination,
    #[serde(default)]
    options: Option<WayfindingOptions>,
}

fn load_fixture(path: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{path}")).unwrap()
}

fn route_json(case_json: &str) -> serde_json::Value {
    let case: RouteCase = serde_json::from_str(case_json).unwrap();
    let opts = case.options.unwrap_or_default();
    let route = compute_route(&case.origin, &case.destination, &opts);
    // Go through text so both sides are parsed by the same float reader.
    let text = serde_json::to_string(&route).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Compare actual route output against the expected snapshot file.
/// When `UPDATE_SNAPSHOTS=1` is set, write/overwrite the expected file instead.
fn assert_snapshot(actual: &serde_json::Value, expected_path: &str) {
    let path = format!("tests/fixtures/expected/{expected_path}");

    if matches!(std::env::var("UPDATE_SNAPSHOTS").as_deref(), Ok("1")) {
        let dir = Path::new(&path).parent().unwrap();
        std::fs::create_dir_all(dir).unwrap();
        let pretty = serde_json::to_string_pretty(actual).unwrap();
        std::fs::write(&path, pretty.as_bytes()).unwrap();
        eprintln!("Updated snapshot: {path}");
        return;
    }

    let expected_str = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Expected file not found: {path}. Run with UPDATE_SNAPSHOTS=1 to generate."));
    let expected: serde_json::Value = serde_json::from_str(&expected_str)
        .unwrap_or_else(|e| panic!("Failed to parse {path}: {e}"));

    assert_eq!(
        *actual, expected,
        "Snapshot mismatch for {path}.\nRun with UPDATE_SNAPSHOTS=1 to update."
    );
}

fn assert_route_snapshot(name: &str) {
    let case = load_fixture(&format!("routes/{name}.json"));
    let actual = route_json(&case);
    assert_snapshot(&actual, &format!("routes/{name}.json"));
}

#[test]
fn snapshot_01_due_east() {
    assert_route_snapshot("01_due_east");
}

#[test]
fn snapshot_02_floor_change() {
    assert_route_snapshot("02_floor_change");
}

#[test]
fn snapshot_03_west_then_north() {
    assert_route_snapshot("03_west_then_north");
}

#[test]
fn snapshot_04_degenerate() {
    assert_route_snapshot("04_degenerate");
}

#[test]
fn snapshot_05_long_walk_upstairs() {
    assert_route_snapshot("05_long_walk_upstairs");
}
