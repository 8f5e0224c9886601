//! Core trait for anything with a position on the globe.

/// A value with a latitude/longitude position, both in degrees.
///
/// The route optimizer is generic over this trait so that callers can route
/// their own records (keeping identifiers and metadata) without first
/// converting them to [`Waypoint`](crate::Waypoint).
///
/// Coordinates are not required to be in range; see
/// [`Waypoint::is_valid`](crate::Waypoint::is_valid).
pub trait Located {
    /// Latitude in degrees, expected in `[-90, 90]`.
    fn latitude(&self) -> f64;

    /// Longitude in degrees, expected in `[-180, 180]`.
    fn longitude(&self) -> f64;
}

impl<T: Located + ?Sized> Located for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

impl Located for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }

    fn longitude(&self) -> f64 {
        self.1
    }
}
