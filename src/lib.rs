//! Velofit - Bike Fit Geometry Core
//!
//! Computes the 2D stick-figure model of a bicycle and its rider from frame
//! geometry, cockpit setup and rider measurements: named anchor points,
//! drawn line segments, and scalar fit metrics with warning thresholds.
//! The SVG renderer and form layer live on the JS side; this core is pure
//! computation behind a thin wasm-bindgen surface.

pub mod anchor;
pub mod bike;
pub mod body;
pub mod catalog;
pub mod engine;
pub mod ik;
pub mod limits;
mod math;
pub mod metrics;
pub mod rider;
pub mod thresholds;

#[cfg(target_arch = "wasm32")]
pub mod api;

pub use anchor::{AnchorId, PointMap, PointRef, Segment, ARC_POINT_COUNT};
pub use bike::{BikeData, BikeGeometry, CockpitSetup, HandPosition, RiderSetup};
pub use body::{BodyRatios, LimbLengths, SaddleFit};
pub use catalog::{BikeCatalog, CatalogError};
pub use engine::{
    compute_geometry, compute_geometry_scaled, compute_geometry_with, GeometryResult, DRAW_SCALE,
};
pub use metrics::FitMetrics;
pub use thresholds::{FitReport, Severity};

/// Install the appropriate logger for the current target.
///
/// On wasm this also hooks panics into the browser console. Safe to call
/// more than once.
pub fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
        } else {
            // Native builds (tests, tools) leave the `log` facade on its
            // default no-op logger.
        }
    }
}

/// Module entry point, called once by the wasm loader
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init_logging();
    log::info!("velofit core ready");
}
