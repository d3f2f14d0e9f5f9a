//! Trail filtering.
//!
//! A [`TrailFilter`] is a set of optional criteria. Exact-match criteria
//! (name, difficulty, length) and a circular proximity region (centre and
//! radius) are combined with logical AND; absent criteria impose no
//! constraint.
//!
//! Validation happens once per filter via [`TrailFilter::validate`]; matching
//! itself never fails.

use super::error::FilterError;
use super::geo::Coordinate;
use super::trail::{Difficulty, Trail};

/// Optional match criteria applied to stored trails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrailFilter {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_km: Option<f64>,
    pub difficulty: Option<Difficulty>,
    pub length_km: Option<f64>,
}

/// A circular region on the earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    pub center: Coordinate,
    pub radius_km: f64,
}

impl Proximity {
    /// Whether `point` lies within the region, edge included.
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.center.distance_km(point) <= self.radius_km
    }
}

impl TrailFilter {
    /// A filter matching trails with this exact name within `radius_km` of a point.
    pub fn near_named(name: impl Into<String>, center: Coordinate, radius_km: f64) -> Self {
        Self {
            name: Some(name.into()),
            latitude: Some(center.latitude),
            longitude: Some(center.longitude),
            radius_km: Some(radius_km),
            ..Self::default()
        }
    }

    /// The proximity region, when all of latitude, longitude and radius are set.
    pub fn proximity(&self) -> Option<Proximity> {
        match (self.latitude, self.longitude, self.radius_km) {
            (Some(latitude), Some(longitude), Some(radius_km)) => Some(Proximity {
                center: Coordinate::new(latitude, longitude),
                radius_km,
            }),
            _ => None,
        }
    }

    /// Check the filter is well formed.
    ///
    /// Latitude, longitude and radius must be given together or not at all;
    /// a partial triple reports which part is missing.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.name.as_deref() == Some("") {
            return Err(FilterError::EmptyName);
        }

        match (self.latitude, self.longitude, self.radius_km) {
            (Some(latitude), Some(longitude), Some(radius_km)) => {
                if !Coordinate::latitude_in_range(latitude) {
                    return Err(FilterError::LatitudeOutOfRange);
                }
                if !Coordinate::longitude_in_range(longitude) {
                    return Err(FilterError::LongitudeOutOfRange);
                }
                if radius_km.is_nan() || radius_km < 0.0 {
                    return Err(FilterError::NegativeRadius);
                }
            }
            (Some(_), Some(_), None) => return Err(FilterError::MissingRadius),
            (Some(_), None, _) => return Err(FilterError::MissingLongitude),
            (None, Some(_), _) => return Err(FilterError::MissingLatitude),
            (None, None, Some(_)) => return Err(FilterError::MissingCenter),
            (None, None, None) => {}
        }

        if let Some(length_km) = self.length_km
            && (length_km.is_nan() || length_km < 0.0)
        {
            return Err(FilterError::NegativeLength);
        }

        Ok(())
    }

    /// Whether `trail` satisfies every active criterion.
    pub fn matches(&self, trail: &Trail) -> bool {
        if let Some(name) = self.name.as_deref()
            && !name.is_empty()
            && name != trail.name
        {
            return false;
        }
        if let Some(region) = self.proximity()
            && !region.contains(&trail.start())
        {
            return false;
        }
        if self.difficulty.is_some_and(|d| d != trail.difficulty) {
            return false;
        }
        if self.length_km.is_some_and(|l| l != trail.length_km) {
            return false;
        }
        true
    }
}

/// Whether `trail` satisfies `filter`. An absent filter matches everything.
pub fn matches(trail: &Trail, filter: Option<&TrailFilter>) -> bool {
    filter.is_none_or(|f| f.matches(trail))
}
