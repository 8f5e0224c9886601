//! Place records and store events.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::Located;
use crate::route::Waypoint;

/// Unique identifier assigned to a place when it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PlaceId(Uuid);

impl PlaceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for PlaceId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Request to store a new place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewPlace {
    pub title: String,
    /// Free-form note shown under the title.
    pub subtitle: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewPlace {
    pub fn new(title: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            latitude,
            longitude,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }
}

/// A stored place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Place {
    pub id: PlaceId,
    pub title: String,
    pub subtitle: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub(crate) fn from_new(id: PlaceId, new: NewPlace) -> Self {
        Self {
            id,
            title: new.title,
            subtitle: new.subtitle,
            latitude: new.latitude,
            longitude: new.longitude,
        }
    }

    pub fn to_waypoint(&self) -> Waypoint {
        Waypoint::new(self.title.clone(), self.latitude, self.longitude)
    }
}

impl Located for Place {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Change notification broadcast by a place store after a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Created(PlaceId),
    Deleted(PlaceId),
}

impl StoreEvent {
    pub fn place_id(&self) -> PlaceId {
        match *self {
            StoreEvent::Created(id) | StoreEvent::Deleted(id) => id,
        }
    }
}
