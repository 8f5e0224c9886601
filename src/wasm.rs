//! JavaScript entry points.
//!
//! Waypoints cross the boundary as plain objects:
//! `{ label: string, latitude: number, longitude: number }`.

use wasm_bindgen::prelude::*;

use crate::route::{RouteConfig, RouteOptimizer, Waypoint};

/// Orders `waypoints` by nearest neighbor and returns the visiting sequence
/// as an array of waypoint objects.
///
/// Throws the error's message when fewer than two waypoints are given.
#[wasm_bindgen(js_name = computeRoute)]
pub fn compute_route(waypoints: JsValue, close_loop: bool) -> Result<JsValue, JsValue> {
    let waypoints: Vec<Waypoint> = serde_wasm_bindgen::from_value(waypoints)
        .map_err(|e| JsValue::from_str(&format!("Cannot read waypoints: {e}")))?;

    let config = RouteConfig::default().with_close_loop(close_loop);
    let route = RouteOptimizer::compute_route_with(&waypoints, &config)
        .map_err(|e| JsValue::from_str(&e.user_message()))?;

    serde_wasm_bindgen::to_value(route.stops())
        .map_err(|e| JsValue::from_str(&format!("Cannot write route: {e}")))
}

/// Great-circle distance in kilometers between two coordinates in degrees.
#[wasm_bindgen(js_name = haversineKm)]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    crate::geo::haversine_km(lat1, lon1, lat2, lon2)
}
