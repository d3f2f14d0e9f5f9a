//! Trail records and their identifiers.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::error::ValidationError;
use super::geo::Coordinate;

/// Error returned when parsing an invalid trail id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trail id: {0}")]
pub struct InvalidTrailId(String);

/// Opaque unique identifier of a trail.
///
/// Generated once when a trail is created and never reassigned.
///
/// # Examples
///
/// ```
/// use trail_server::domain::TrailId;
///
/// let id = TrailId::new();
/// let parsed = TrailId::parse(&id.to_string()).unwrap();
/// assert_eq!(id, parsed);
///
/// assert!(TrailId::parse("not-a-trail").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrailId(Uuid);

impl TrailId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its textual form.
    pub fn parse(s: &str) -> Result<Self, InvalidTrailId> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidTrailId(s.to_string()))
    }
}

impl Default for TrailId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrailId({})", self.0)
    }
}

impl fmt::Display for TrailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Error returned when parsing an unknown difficulty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid difficulty: {0}")]
pub struct InvalidDifficulty(String);

/// How hard a trail is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = InvalidDifficulty;

    /// Parse a difficulty. Only the lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(InvalidDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A geographic trail record.
///
/// Construction does not validate; [`Trail::validate`] checks the field
/// constraints and the store refuses any trail that fails it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    pub id: TrailId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub difficulty: Difficulty,
    pub length_km: f64,
    pub created_at: DateTime<Utc>,
}

impl Trail {
    /// Create a trail with a fresh id, stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        difficulty: Difficulty,
        length_km: f64,
    ) -> Self {
        Self {
            id: TrailId::new(),
            name: name.into(),
            latitude,
            longitude,
            difficulty,
            length_km,
            created_at: Utc::now(),
        }
    }

    /// The trail's starting point.
    pub fn start(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Check every field constraint, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if !Coordinate::latitude_in_range(self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange);
        }
        if !Coordinate::longitude_in_range(self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange);
        }
        if self.length_km.is_nan() || self.length_km < 0.0 {
            return Err(ValidationError::NegativeLength);
        }
        Ok(())
    }
}
