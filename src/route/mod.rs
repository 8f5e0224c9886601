//! Nearest-neighbor route ordering.
//!
//! A greedy tour-construction heuristic: starting from the first waypoint,
//! repeatedly travel to the closest unvisited waypoint by great-circle
//! distance, then return to the start to close the loop.
//!
//! The heuristic carries no optimality guarantee and applies no
//! local-improvement pass afterwards. The start is always the first input
//! element; it is never searched for.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977). "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem", *SIAM J. Comput.* 6(3), 563-581.

mod config;
mod optimizer;
mod types;

pub use config::{RouteConfig, ShortInputPolicy};
pub use optimizer::{RouteOptimizer, MIN_WAYPOINTS};
pub use types::{Route, Waypoint};
pub(crate) use types::coordinates_in_range;
