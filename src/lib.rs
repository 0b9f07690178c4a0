//! Great-circle distances and the shortest detour for two drivers to share a ride.

pub mod coordinate;
pub mod detour;
pub mod geo;

pub use coordinate::Coordinate;
pub use detour::{best_detour, detour_candidates, shortest_detour, Detour, Pickup};
pub use geo::{deg_to_rad, distance_between, haversine_km, EARTH_RADIUS_KM};
