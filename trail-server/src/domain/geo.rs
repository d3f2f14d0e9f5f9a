//! Geographic coordinates and great-circle distance.

/// Mean earth radius used for the spherical model, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether the latitude lies in [-90, 90]. NaN is out of range.
    pub fn latitude_in_range(latitude: f64) -> bool {
        (-90.0..=90.0).contains(&latitude)
    }

    /// Whether the longitude lies in [-180, 180]. NaN is out of range.
    pub fn longitude_in_range(longitude: f64) -> bool {
        (-180.0..=180.0).contains(&longitude)
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(*self, *other)
    }
}

/// Haversine distance between two coordinates on a spherical earth, in kilometres.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let p = Coordinate::new(45.6789, -122.3456);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        let d = haversine_km(a, b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn portland_to_seattle() {
        let portland = Coordinate::new(45.5152, -122.6784);
        let seattle = Coordinate::new(47.6062, -122.3321);
        let d = portland.distance_km(&seattle);
        assert!((d - 234.0).abs() < 0.5, "got {d}");
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = haversine_km(a, b);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn range_checks() {
        assert!(Coordinate::latitude_in_range(90.0));
        assert!(Coordinate::latitude_in_range(-90.0));
        assert!(!Coordinate::latitude_in_range(90.0001));
        assert!(!Coordinate::latitude_in_range(f64::NAN));

        assert!(Coordinate::longitude_in_range(-180.0));
        assert!(!Coordinate::longitude_in_range(180.5));
        assert!(!Coordinate::longitude_in_range(f64::NAN));
    }
}
