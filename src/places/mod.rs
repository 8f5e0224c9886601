//! Saved places and route planning over them.
//!
//! The store persists named coordinates and tells subscribers whenever its
//! contents change; the planner routes whatever the store currently holds.
//! Both sit in front of [`RouteOptimizer`](crate::RouteOptimizer) and are
//! where this crate's logging happens.

mod planner;
mod store;
mod types;

pub use planner::RoutePlanner;
pub use store::{MemoryPlaceStore, PlaceStore};
pub use types::{NewPlace, Place, PlaceId, StoreEvent};
