//! Great-circle geometry.
//!
//! Distances are computed on a spherical Earth with the haversine formula.
//! No planar approximation is used anywhere, so results stay correct near
//! the poles and across the anti-meridian.
//!
//! # References
//!
//! - Sinnott, R. W. (1984). "Virtues of the Haversine", *Sky and Telescope* 68(2), 159.

mod distance;
mod types;

pub use distance::{distance_km, haversine_km, EARTH_RADIUS_KM};
pub use types::Located;
