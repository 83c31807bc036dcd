use serde::{Deserialize, Serialize};

/// Mean earth radius in meters (IUGG), matches common web map tooling.
const EARTH_RADIUS_M: f64 = 6_371_008.8;
const METERS_PER_MILE: f64 = 1_609.344;

/// A WGS84 position. Serialized as a `[longitude, latitude]` array, the same
/// order map libraries expect for a camera center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lon: f64,
    pub lat: f64,
}

impl Coords {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lon, c.lat]
    }
}

/// Haversine great-circle distance between two points in statute miles.
pub fn distance_miles(from: Coords, to: Coords) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    c * EARTH_RADIUS_M / METERS_PER_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let p = Coords::new(-97.7, 30.3);
        assert!(distance_miles(p, p).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coords::new(-83.0, 39.9);
        let b = Coords::new(-97.7, 30.3);
        assert!((distance_miles(a, b) - distance_miles(b, a)).abs() < 1e-9);
    }

    #[test]
    fn columbus_to_austin_is_about_a_thousand_miles() {
        let d = distance_miles(Coords::new(-83.0, 39.9), Coords::new(-97.7, 30.3));
        assert!((1000.0..1150.0).contains(&d), "got {d}");
    }

    #[test]
    fn one_degree_of_latitude_is_about_69_miles() {
        let d = distance_miles(Coords::new(0.0, 0.0), Coords::new(0.0, 1.0));
        assert!((d - 69.09).abs() < 0.1, "got {d}");
    }

    #[test]
    fn coords_parse_from_lon_lat_array() {
        let c: Coords = serde_json::from_str("[-89.6, 39.8]").unwrap();
        assert_eq!(c, Coords::new(-89.6, 39.8));
        assert_eq!(serde_json::to_string(&c).unwrap(), "[-89.6,39.8]");
    }

    #[test]
    fn validity_checks_ranges() {
        assert!(Coords::new(-180.0, 90.0).is_valid());
        assert!(!Coords::new(-181.0, 0.0).is_valid());
        assert!(!Coords::new(0.0, 91.0).is_valid());
        assert!(!Coords::new(f64::NAN, 0.0).is_valid());
    }
}
