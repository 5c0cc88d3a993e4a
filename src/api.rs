//! JS-facing bindings and session state.
//!
//! The only state the wasm side holds is the loaded catalog; everything else
//! is a pure call per invocation. Bindings are thin wrappers: deserialize
//! with serde-wasm-bindgen, call the pure function, serialize back. Errors
//! cross the boundary as `JsValue` strings.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::bike::{BikeData, CockpitSetup, RiderSetup};
use crate::body::HEAD_WIDTH_RATIO;
use crate::catalog::BikeCatalog;
use crate::engine::{compute_geometry, compute_geometry_scaled};
use crate::metrics::FitMetrics;
use crate::thresholds::FitReport;
use crate::{limits, DRAW_SCALE};

thread_local! {
    static CATALOG: RefCell<Option<BikeCatalog>> = const { RefCell::new(None) };
}

/// Execute a closure with read access to the loaded catalog
///
/// Returns None if no catalog has been loaded yet
fn with_catalog<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&BikeCatalog) -> R,
{
    CATALOG.with(|cell| cell.borrow().as_ref().map(f))
}

fn to_js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// Parse, validate and install the bike catalog
#[wasm_bindgen]
pub fn load_catalog(json: &str) -> Result<(), JsValue> {
    let catalog = BikeCatalog::from_json(json)
        .map_err(|e| to_js_error(format!("Failed to load catalog: {e}")))?;
    CATALOG.with(|cell| *cell.borrow_mut() = Some(catalog));
    Ok(())
}

#[wasm_bindgen]
pub fn catalog_brands() -> Vec<String> {
    with_catalog(|catalog| catalog.brands().map(str::to_owned).collect()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn catalog_models(brand: &str) -> Vec<String> {
    with_catalog(|catalog| catalog.models(brand).map(str::to_owned).collect()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn catalog_sizes(brand: &str, model: &str) -> Vec<String> {
    with_catalog(|catalog| catalog.sizes(brand, model).map(str::to_owned).collect())
        .unwrap_or_default()
}

/// Look one frame geometry up from the loaded catalog
#[wasm_bindgen]
pub fn lookup_geometry(brand: &str, model: &str, size: &str) -> Result<JsValue, JsValue> {
    let geometry = with_catalog(|catalog| catalog.geometry(brand, model, size).cloned())
        .ok_or_else(|| to_js_error("No catalog loaded"))?
        .map_err(|e| {
            log::warn!("catalog lookup failed: {e}");
            to_js_error(e)
        })?;
    serde_wasm_bindgen::to_value(&geometry).map_err(to_js_error)
}

/// Compute the full figure for one bike at the default drawing scale
#[wasm_bindgen]
pub fn compute_fit(bike: JsValue) -> Result<JsValue, JsValue> {
    let bike: BikeData = serde_wasm_bindgen::from_value(bike)
        .map_err(|e| to_js_error(format!("Invalid bike data: {e}")))?;
    serde_wasm_bindgen::to_value(&compute_geometry(&bike)).map_err(to_js_error)
}

/// Compute the full figure at an explicit drawing scale
#[wasm_bindgen]
pub fn compute_fit_scaled(bike: JsValue, scale: f32) -> Result<JsValue, JsValue> {
    let bike: BikeData = serde_wasm_bindgen::from_value(bike)
        .map_err(|e| to_js_error(format!("Invalid bike data: {e}")))?;
    serde_wasm_bindgen::to_value(&compute_geometry_scaled(&bike, scale)).map_err(to_js_error)
}

/// Classify computed metrics against the fit thresholds
#[wasm_bindgen]
pub fn classify_fit(metrics: JsValue) -> Result<JsValue, JsValue> {
    let metrics: FitMetrics = serde_wasm_bindgen::from_value(metrics)
        .map_err(|e| to_js_error(format!("Invalid metrics: {e}")))?;
    serde_wasm_bindgen::to_value(&FitReport::evaluate(&metrics)).map_err(to_js_error)
}

/// Snap cockpit fields onto their min/max/step grid
#[wasm_bindgen]
pub fn clamp_cockpit(setup: JsValue) -> Result<JsValue, JsValue> {
    let setup: CockpitSetup = serde_wasm_bindgen::from_value(setup)
        .map_err(|e| to_js_error(format!("Invalid cockpit setup: {e}")))?;
    serde_wasm_bindgen::to_value(&limits::clamp_cockpit(&setup)).map_err(to_js_error)
}

/// Snap rider fields onto their min/max/step grid
#[wasm_bindgen]
pub fn clamp_rider(rider: JsValue) -> Result<JsValue, JsValue> {
    let rider: RiderSetup = serde_wasm_bindgen::from_value(rider)
        .map_err(|e| to_js_error(format!("Invalid rider setup: {e}")))?;
    serde_wasm_bindgen::to_value(&limits::clamp_rider(&rider)).map_err(to_js_error)
}

/// Default millimeters-to-drawing-units scale
#[wasm_bindgen]
pub fn draw_scale() -> f32 {
    DRAW_SCALE
}

/// Head ellipse width as a share of head height, for the renderer
#[wasm_bindgen]
pub fn head_width_ratio() -> f32 {
    HEAD_WIDTH_RATIO
}
