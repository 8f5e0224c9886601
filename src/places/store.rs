//! Place store contract and the in-memory implementation.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::types::{NewPlace, Place, PlaceId, StoreEvent};
use crate::route::coordinates_in_range;
use crate::{Error, Result};

/// Persistence contract for saved places.
///
/// Implementations assign each place a unique [`PlaceId`] on creation and
/// return places from [`list`](PlaceStore::list) in insertion order.
pub trait PlaceStore: Send + Sync {
    /// Stores a new place and returns it with its assigned identifier.
    fn create(&self, place: NewPlace) -> Result<Place>;

    /// Returns every stored place in insertion order.
    fn list(&self) -> Vec<Place>;

    /// Looks up a single place.
    fn get(&self, id: PlaceId) -> Result<Place>;

    /// Removes a place and returns it.
    fn delete(&self, id: PlaceId) -> Result<Place>;
}

impl<S: PlaceStore + ?Sized> PlaceStore for &S {
    fn create(&self, place: NewPlace) -> Result<Place> {
        (**self).create(place)
    }

    fn list(&self) -> Vec<Place> {
        (**self).list()
    }

    fn get(&self, id: PlaceId) -> Result<Place> {
        (**self).get(id)
    }

    fn delete(&self, id: PlaceId) -> Result<Place> {
        (**self).delete(id)
    }
}

impl<S: PlaceStore + ?Sized> PlaceStore for Arc<S> {
    fn create(&self, place: NewPlace) -> Result<Place> {
        (**self).create(place)
    }

    fn list(&self) -> Vec<Place> {
        (**self).list()
    }

    fn get(&self, id: PlaceId) -> Result<Place> {
        (**self).get(id)
    }

    fn delete(&self, id: PlaceId) -> Result<Place> {
        (**self).delete(id)
    }
}

/// Thread-safe in-memory [`PlaceStore`] with change notifications.
///
/// # Examples
///
/// ```
/// use waypoint_route::{MemoryPlaceStore, NewPlace, PlaceStore, StoreEvent};
///
/// let store = MemoryPlaceStore::new();
/// let events = store.subscribe();
///
/// let home = store.create(NewPlace::new("Home", 41.0, 29.0)).unwrap();
/// assert_eq!(events.try_recv().unwrap(), StoreEvent::Created(home.id));
/// assert_eq!(store.list().len(), 1);
/// ```
#[derive(Default)]
pub struct MemoryPlaceStore {
    places: RwLock<Vec<Place>>,
    subscribers: Mutex<Vec<Sender<StoreEvent>>>,
}

impl MemoryPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for [`StoreEvent`]s.
    ///
    /// Dropping the receiver unsubscribes it.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    pub fn len(&self) -> usize {
        self.places
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn notify(&self, event: StoreEvent) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(event).is_ok());
        tracing::trace!("{:?} delivered to {} subscribers", event, subscribers.len());
    }
}

impl PlaceStore for MemoryPlaceStore {
    fn create(&self, place: NewPlace) -> Result<Place> {
        if place.title.trim().is_empty() {
            return Err(Error::invalid_place("title is empty"));
        }

        if !coordinates_in_range(place.latitude, place.longitude) {
            tracing::warn!(
                "Storing place '{}' with out-of-range coordinates: ({}, {})",
                place.title,
                place.latitude,
                place.longitude
            );
        }

        let place = Place::from_new(PlaceId::generate(), place);
        self.places
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(place.clone());
        tracing::debug!("Created place {} '{}'", place.id, place.title);

        self.notify(StoreEvent::Created(place.id));
        Ok(place)
    }

    fn list(&self) -> Vec<Place> {
        self.places
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn get(&self, id: PlaceId) -> Result<Place> {
        self.places
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(Error::PlaceNotFound(id))
    }

    fn delete(&self, id: PlaceId) -> Result<Place> {
        let removed = {
            let mut places = self.places.write().unwrap_or_else(PoisonError::into_inner);
            let pos = places
                .iter()
                .position(|p| p.id == id)
                .ok_or(Error::PlaceNotFound(id))?;
            places.remove(pos)
        };
        tracing::debug!("Deleted place {} '{}'", removed.id, removed.title);

        self.notify(StoreEvent::Deleted(id));
        Ok(removed)
    }
}
