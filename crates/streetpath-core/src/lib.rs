//! Geographic core types for the streetpath engine.
//!
//! This crate provides the primitives shared by the rest of the workspace:
//! the [`LatLon`] coordinate, the great-circle distance function used both for
//! edge weights and as the A*/greedy heuristic, and the unit conversions used
//! when reporting a distance.

pub mod geo;
pub mod units;

pub use geo::{EARTH_RADIUS_KM, LatLon, haversine_km, haversine_m};
pub use units::{kilometers_to_miles, meters_to_kilometers, meters_to_miles, miles_to_kilometers};
