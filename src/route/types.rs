//! Waypoint and route value types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geo::{distance_km, Located};

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// A labelled point of interest.
///
/// Labels are display strings and need not be unique.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    label: String,
    latitude: f64,
    longitude: f64,
}

impl Waypoint {
    pub fn new(label: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            label: label.into(),
            latitude,
            longitude,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether both coordinates are finite and within their expected ranges.
    ///
    /// Routing never checks this; out-of-range values are computed through.
    pub fn is_valid(&self) -> bool {
        coordinates_in_range(self.latitude, self.longitude)
    }
}

pub(crate) fn coordinates_in_range(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude)
        && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

impl Located for Waypoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.label, self.latitude, self.longitude)
    }
}

/// An ordered visiting sequence.
///
/// A closed route ends with a second copy of its starting stop, so it is one
/// element longer than the input it was built from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawRoute<T>",
        bound(deserialize = "T: Deserialize<'de>")
    )
)]
pub struct Route<T> {
    stops: Vec<T>,
    closed: bool,
}

/// Unchecked wire form of [`Route`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRoute<T> {
    stops: Vec<T>,
    closed: bool,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawRoute<T>> for Route<T> {
    type Error = String;

    fn try_from(raw: RawRoute<T>) -> Result<Self, Self::Error> {
        // A closed route holds at least the start and its closing copy.
        if raw.closed && raw.stops.len() < 2 {
            return Err(format!(
                "closed route needs at least 2 stops, got {}",
                raw.stops.len()
            ));
        }
        Ok(Route::new(raw.stops, raw.closed))
    }
}

impl<T> Route<T> {
    pub(crate) fn new(stops: Vec<T>, closed: bool) -> Self {
        Self { stops, closed }
    }

    /// All stops in visiting order, including the closing stop if any.
    pub fn stops(&self) -> &[T] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Whether the last stop returns to the start.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn start(&self) -> Option<&T> {
        self.stops.first()
    }

    /// Stops visited once each, i.e. without the closing stop.
    pub fn distinct_stops(&self) -> &[T] {
        if !self.closed {
            return &self.stops;
        }
        match self.stops.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.stops.iter()
    }

    pub fn into_stops(self) -> Vec<T> {
        self.stops
    }
}

impl<T: Located> Route<T> {
    /// Great-circle length of each leg in kilometers.
    pub fn legs_km(&self) -> Vec<f64> {
        self.stops
            .windows(2)
            .map(|leg| distance_km(&leg[0], &leg[1]))
            .collect()
    }

    /// Total great-circle length in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.legs_km().iter().sum()
    }
}

impl<'a, T> IntoIterator for &'a Route<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}

impl<T> IntoIterator for Route<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.into_iter()
    }
}
