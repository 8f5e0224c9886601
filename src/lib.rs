//! Visiting-order planning for saved geographic places.
//!
//! The crate is organised around one piece of real logic and the thin
//! collaborators that feed it:
//!
//! - **Route (core)**: [`RouteOptimizer`] turns a set of labelled coordinates
//!   into a visiting order using a nearest-neighbor heuristic over
//!   great-circle (haversine) distance, optionally closing the loop back to
//!   the start.
//! - **Geo**: the haversine distance function and the [`Located`] trait that
//!   lets any record carrying a latitude/longitude be routed.
//! - **Places**: an in-memory place store with change notifications and a
//!   [`RoutePlanner`] facade that routes whatever the store currently holds.
//!
//! # Architecture
//!
//! The optimizer is a pure, synchronous function of its input. It holds no
//! state, performs no I/O and never logs; it either returns a complete
//! [`Route`] or [`Error::InsufficientInput`]. Everything with side effects
//! (storage, notifications, logging) lives in [`places`].
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the public data types.
//! - `parallel`: batch routing of independent inputs with rayon.
//! - `wasm`: a `wasm-bindgen` entry point for web/mobile shells.

mod error;
pub mod geo;
pub mod places;
pub mod route;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use geo::{distance_km, haversine_km, Located, EARTH_RADIUS_KM};
pub use places::{MemoryPlaceStore, NewPlace, Place, PlaceId, PlaceStore, RoutePlanner, StoreEvent};
pub use route::{Route, RouteConfig, RouteOptimizer, ShortInputPolicy, Waypoint, MIN_WAYPOINTS};
