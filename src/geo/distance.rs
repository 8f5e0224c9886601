//! Haversine distance.

use super::types::Located;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two latitude/longitude pairs
/// given in degrees.
///
/// Out-of-range or non-finite inputs are computed through without
/// validation; non-finite inputs yield `NaN`.
///
/// # Examples
///
/// ```
/// use waypoint_route::haversine_km;
///
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.19).abs() < 0.5);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let s_lat = (d_lat / 2.0).sin();
    let s_lon = (d_lon / 2.0).sin();

    let a = s_lat * s_lat + lat1.to_radians().cos() * lat2.to_radians().cos() * s_lon * s_lon;
    // Rounding can push `a` just past 1 for near-antipodal points.
    let c = 2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt());
    EARTH_RADIUS_KM * c
}

/// Great-circle distance in kilometers between two located values.
pub fn distance_km<A: Located + ?Sized, B: Located + ?Sized>(a: &A, b: &B) -> f64 {
    haversine_km(a.latitude(), a.longitude(), b.latitude(), b.longitude())
}
