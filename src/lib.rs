pub mod catalog;
pub mod error;
pub mod floors;
pub mod geojson_out;
pub mod mapper;
pub mod options;
pub mod router;
pub mod types;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::catalog::{Catalog, SearchQuery};
use crate::error::WayfinderError;
use crate::options::WayfindingOptions;
use crate::types::{Destination, DisplayPoint, Point3};

/// Compute a route to `destination` ({"kind": "store" | "facility", ...}),
/// returned as a JS object. `undefined`/`null` destination returns `null`.
#[wasm_bindgen(js_name = computeRoute)]
pub fn compute_route(
    origin: JsValue,
    destination: JsValue,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let Some(destination) = parse_destination(destination)? else {
        return Ok(JsValue::NULL);
    };
    let opts = parse_options(options)?;
    let origin: Point3 = parse(origin, "origin")?;
    let route = router::compute_route(&origin, &destination, &opts);
    Ok(to_js(&route)?)
}

/// Same as `computeRoute`, returned as a JSON string (or `undefined`).
#[wasm_bindgen(js_name = computeRouteString)]
pub fn compute_route_string(
    origin: JsValue,
    destination: JsValue,
    options: JsValue,
) -> Result<Option<String>, JsValue> {
    console_error_panic_hook::set_once();

    let Some(destination) = parse_destination(destination)? else {
        return Ok(None);
    };
    let opts = parse_options(options)?;
    let origin: Point3 = parse(origin, "origin")?;
    let route = router::compute_route(&origin, &destination, &opts);
    serde_json::to_string(&route)
        .map(Some)
        .map_err(|e| WayfinderError::Serialize(e.to_string()).into())
}

/// Route to a catalog entry by id. Returns `null` when the id is unknown.
#[wasm_bindgen(js_name = routeTo)]
pub fn route_to(
    catalog_json: &str,
    id: &str,
    origin: JsValue,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let catalog = Catalog::from_json(catalog_json)?;
    let opts = parse_options(options)?;
    let origin: Point3 = parse(origin, "origin")?;
    match crate::catalog::route_to(&catalog, id, &origin, &opts) {
        Some(route) => Ok(to_js(&route)?),
        None => Ok(JsValue::NULL),
    }
}

/// Route as a GeoJSON FeatureCollection in floor-plan percentages, or `null`
/// without a destination.
#[wasm_bindgen(js_name = routeGeoJson)]
pub fn route_geojson(
    origin: JsValue,
    destination: JsValue,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let Some(destination) = parse_destination(destination)? else {
        return Ok(JsValue::NULL);
    };
    let opts = parse_options(options)?;
    let origin: Point3 = parse(origin, "origin")?;
    let route = router::compute_route(&origin, &destination, &opts);
    Ok(to_js(&geojson_out::route_to_feature_collection(&route))?)
}

#[wasm_bindgen(js_name = toDisplaySpace)]
pub fn to_display_space(position: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let opts = parse_options(options)?;
    let position: Point3 = parse(position, "position")?;
    Ok(to_js(&mapper::to_display_space(&position, &opts.bounds))?)
}

#[wasm_bindgen(js_name = toLogicalSpace)]
pub fn to_logical_space(point: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let opts = parse_options(options)?;
    let point: DisplayPoint = parse(point, "display point")?;
    Ok(to_js(&mapper::to_logical_space(&point, &opts.bounds))?)
}

/// Percentage point to `{x, y}` pixels on a `width` × `height` surface.
#[wasm_bindgen(js_name = toPixels)]
pub fn to_pixels(point: JsValue, width: f64, height: f64) -> Result<JsValue, JsValue> {
    let point: DisplayPoint = parse(point, "display point")?;
    let (x, y) = point.to_pixels(width, height);
    Ok(to_js(&DisplayPoint::new(x, y))?)
}

/// Pixel position to a percentage point, clamped to the surface.
#[wasm_bindgen(js_name = fromPixels)]
pub fn from_pixels(px: f64, py: f64, width: f64, height: f64) -> Result<JsValue, JsValue> {
    Ok(to_js(&DisplayPoint::from_pixels(px, py, width, height))?)
}

#[wasm_bindgen(js_name = resolveFloor)]
pub fn resolve_floor(position: JsValue, options: JsValue) -> Result<u32, JsValue> {
    let opts = parse_options(options)?;
    let position: Point3 = parse(position, "position")?;
    Ok(floors::resolve_floor(&position, &opts.floors))
}

#[wasm_bindgen(js_name = isOnFloor)]
pub fn is_on_floor(position: JsValue, floor: u32, options: JsValue) -> Result<bool, JsValue> {
    let opts = parse_options(options)?;
    let position: Point3 = parse(position, "position")?;
    Ok(floors::is_on_floor(&position, floor, &opts.floors))
}

/// The built-in demo catalog as a JSON string, ready for the other calls.
#[wasm_bindgen(js_name = sampleCatalog)]
pub fn sample_catalog() -> Result<String, JsValue> {
    serde_json::to_string(&Catalog::sample())
        .map_err(|e| WayfinderError::Serialize(e.to_string()).into())
}

/// Floor selector tabs for the configured floor range.
#[wasm_bindgen(js_name = catalogFloors)]
pub fn catalog_floors(catalog_json: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let catalog = Catalog::from_json(catalog_json)?;
    let opts = parse_options(options)?;
    Ok(to_js(&catalog.floors(&opts.floors.levels()))?)
}

#[wasm_bindgen(js_name = catalogCategories)]
pub fn catalog_categories(catalog_json: &str) -> Result<js_sys::Array, JsValue> {
    let catalog = Catalog::from_json(catalog_json)?;
    Ok(catalog
        .categories()
        .into_iter()
        .map(|c| JsValue::from_str(&c))
        .collect())
}

#[wasm_bindgen(js_name = searchCatalog)]
pub fn search_catalog(catalog_json: &str, query: JsValue) -> Result<JsValue, JsValue> {
    let catalog = Catalog::from_json(catalog_json)?;
    let query: SearchQuery = if query.is_undefined() || query.is_null() {
        SearchQuery::default()
    } else {
        parse(query, "search query")?
    };
    Ok(to_js(&catalog.search(&query))?)
}

/// Markers for one floor as a GeoJSON FeatureCollection.
#[wasm_bindgen(js_name = floorMarkers)]
pub fn floor_markers(catalog_json: &str, floor: u32, options: JsValue) -> Result<JsValue, JsValue> {
    let catalog = Catalog::from_json(catalog_json)?;
    let opts = parse_options(options)?;
    let items = catalog.on_floor(floor);
    Ok(to_js(&geojson_out::markers_to_feature_collection(
        &items,
        &opts.bounds,
    ))?)
}

/// No destination selected means no active route.
fn parse_destination(destination: JsValue) -> Result<Option<Destination>, WayfinderError> {
    if destination.is_undefined() || destination.is_null() {
        Ok(None)
    } else {
        parse(destination, "destination").map(Some)
    }
}

fn parse_options(options: JsValue) -> Result<WayfindingOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(WayfindingOptions::default())
    } else {
        Ok(parse(options, "options")?)
    }
}

fn parse<T: DeserializeOwned>(value: JsValue, what: &'static str) -> Result<T, WayfinderError> {
    serde_wasm_bindgen::from_value(value).map_err(WayfinderError::invalid(what))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, WayfinderError> {
    // Plain objects rather than ES Maps for the string-keyed property bags.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| WayfinderError::Serialize(e.to_string()))
}
