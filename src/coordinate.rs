use anyhow::{ensure, Context, Result};
use std::fmt;
use std::str::FromStr;

use crate::geo;

/// A point on Earth's surface, in degrees.
///
/// Construction does not check ranges; call [`Coordinate::validate`] at the
/// boundary where input arrives if that matters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            lon: longitude,
            lat: latitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.lon
    }

    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        geo::distance_between(self, other)
    }

    /// Returns the coordinate unchanged if both components are finite and in range.
    pub fn validate(self) -> Result<Self> {
        ensure!(
            self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat),
            "latitude {} is outside [-90, 90]",
            self.lat
        );
        ensure!(
            self.lon.is_finite() && (-180.0..=180.0).contains(&self.lon),
            "longitude {} is outside [-180, 180]",
            self.lon
        );
        Ok(self)
    }
}

/// Renders as `LAT,LON`, the same order [`FromStr`] accepts.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parses `LAT,LON` (latitude first, as maps print it).
impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s
            .split_once(',')
            .with_context(|| format!("expected LAT,LON but got {:?}", s))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .with_context(|| format!("parsing latitude in {:?}", s))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .with_context(|| format!("parsing longitude in {:?}", s))?;
        Ok(Coordinate::new(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_longitude_then_latitude() {
        let c = Coordinate::new(-88.221674, 40.105706);
        assert_eq!(c.longitude(), -88.221674);
        assert_eq!(c.latitude(), 40.105706);
    }

    #[test]
    fn parse_lat_first() {
        let c: Coordinate = " 40.108266 , -88.215988".parse().unwrap();
        assert_eq!(c, Coordinate::new(-88.215988, 40.108266));
    }

    #[test]
    fn display_parses_back() {
        let c = Coordinate::new(-88.215773, 40.114084);
        assert_eq!(c.to_string(), "40.114084,-88.215773");
        assert_eq!(c.to_string().parse::<Coordinate>().unwrap(), c);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("40.1".parse::<Coordinate>().is_err());
        assert!("north,-88.2".parse::<Coordinate>().is_err());
        assert!("40.1,".parse::<Coordinate>().is_err());
    }

    #[test]
    fn parse_does_not_validate_range() {
        let c: Coordinate = "95.0,200.0".parse().unwrap();
        assert!(c.validate().is_err());
    }

    #[test]
    fn validate_bounds() {
        assert!(Coordinate::new(180.0, 90.0).validate().is_ok());
        assert!(Coordinate::new(-180.0, -90.0).validate().is_ok());
        assert!(Coordinate::new(0.0, 90.5).validate().is_err());
        assert!(Coordinate::new(-180.5, 0.0).validate().is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).validate().is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn validate_error_names_the_component() {
        let err = Coordinate::new(0.0, 91.0).validate().unwrap_err();
        assert!(err.to_string().contains("latitude"), "{}", err);
    }

    #[test]
    fn distance_to_matches_free_function() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        assert_eq!(a.distance_to(&b), geo::distance_between(&a, &b));
    }
}
