//! Route planning over a place store.

use super::store::PlaceStore;
use super::types::Place;
use crate::route::{Route, RouteConfig, RouteOptimizer};
use crate::Result;

/// Routes the current contents of a [`PlaceStore`].
///
/// The planner reads the store afresh on every call, so calling it again
/// after a [`StoreEvent`](crate::StoreEvent) always reflects the latest
/// places.
///
/// # Examples
///
/// ```
/// use waypoint_route::{MemoryPlaceStore, NewPlace, PlaceStore, RoutePlanner};
///
/// let store = MemoryPlaceStore::new();
/// store.create(NewPlace::new("A", 0.0, 0.0)).unwrap();
/// store.create(NewPlace::new("B", 0.0, 10.0)).unwrap();
/// store.create(NewPlace::new("C", 0.0, 5.0)).unwrap();
///
/// let planner = RoutePlanner::new(&store);
/// assert_eq!(planner.plan_titles().unwrap(), ["A", "C", "B", "A"]);
/// ```
pub struct RoutePlanner<S: PlaceStore> {
    store: S,
    config: RouteConfig,
}

impl<S: PlaceStore> RoutePlanner<S> {
    /// Creates a planner with the default [`RouteConfig`].
    pub fn new(store: S) -> Self {
        Self::with_config(store, RouteConfig::default())
    }

    pub fn with_config(store: S, config: RouteConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Routes every stored place in the store's listing order.
    pub fn plan(&self) -> Result<Route<Place>> {
        let places = self.store.list();
        match RouteOptimizer::compute_route_with(&places, &self.config) {
            Ok(route) => {
                tracing::debug!(
                    "Planned route over {} places, {} stops, {:.3} km",
                    places.len(),
                    route.len(),
                    route.total_distance_km()
                );
                Ok(route)
            }
            Err(e) => {
                tracing::debug!("Route planning refused: {e}");
                Err(e)
            }
        }
    }

    /// Titles of the planned route in visiting order.
    pub fn plan_titles(&self) -> Result<Vec<String>> {
        Ok(self.plan()?.into_iter().map(|p| p.title).collect())
    }
}
