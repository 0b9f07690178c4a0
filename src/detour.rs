//! Extra distance for one driver to pick up the other trip's passenger.
//!
//! Trips are A -> B and C -> D. Only two routings are considered: either the
//! A -> B driver takes the detour or the C -> D driver does.

use crate::coordinate::Coordinate;
use crate::geo::distance_between;

/// Which driver absorbs the detour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pickup {
    /// The A -> B driver collects the C -> D passenger.
    FirstDriver,
    /// The C -> D driver collects the A -> B passenger.
    SecondDriver,
}

impl Pickup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pickup::FirstDriver => "first",
            Pickup::SecondDriver => "second",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Detour {
    pub pickup: Pickup,
    /// Kilometers added over the trip the driver would have made alone.
    /// Not clamped, so may be negative.
    pub extra_km: f64,
}

/// Both candidate detours, first driver then second.
pub fn detour_candidates(
    a: &Coordinate,
    b: &Coordinate,
    c: &Coordinate,
    d: &Coordinate,
) -> [Detour; 2] {
    let ab = distance_between(a, b);
    let cd = distance_between(c, d);
    let ac = distance_between(a, c);
    let bd = distance_between(b, d);

    // Term order is kept identical across both costs so swapping the trips
    // swaps the two values bit for bit.
    [
        Detour {
            pickup: Pickup::FirstDriver,
            extra_km: ac + cd + bd - ab,
        },
        Detour {
            pickup: Pickup::SecondDriver,
            extra_km: ac + ab + bd - cd,
        },
    ]
}

/// The cheaper of the two candidates. Ties (and NaN) go to the second driver.
pub fn best_detour(a: &Coordinate, b: &Coordinate, c: &Coordinate, d: &Coordinate) -> Detour {
    let [first, second] = detour_candidates(a, b, c, d);
    if first.extra_km < second.extra_km {
        first
    } else {
        second
    }
}

/// Shortest detour in kilometers for trips A -> B and C -> D.
pub fn shortest_detour(a: &Coordinate, b: &Coordinate, c: &Coordinate, d: &Coordinate) -> f64 {
    best_detour(a, b, c, d).extra_km
}
