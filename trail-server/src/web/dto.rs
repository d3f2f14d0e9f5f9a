//! Data transfer objects for web requests and responses.

use std::num::ParseFloatError;

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, InvalidDifficulty, Trail, TrailFilter, ValidationError};

/// Request to exchange credentials for a token.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// A freshly minted bearer token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Request body to create or replace a trail.
///
/// Every field is optional so that a missing field is reported by name
/// rather than as a generic JSON error.
#[derive(Debug, Default, Deserialize)]
pub struct TrailRequest {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub difficulty: Option<String>,
    pub length_km: Option<f64>,
}

impl TrailRequest {
    /// Check required fields are present and build a new trail.
    ///
    /// Range checks are left to [`Trail::validate`].
    pub fn into_trail(self) -> Result<Trail, ValidationError> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::NameRequired)?;
        let lat = self.lat.ok_or(ValidationError::LatitudeRequired)?;
        let lon = self.lon.ok_or(ValidationError::LongitudeRequired)?;
        let difficulty: Difficulty = self
            .difficulty
            .ok_or(ValidationError::DifficultyRequired)?
            .parse()
            .map_err(|_| ValidationError::InvalidDifficulty)?;
        let length_km = self.length_km.ok_or(ValidationError::LengthRequired)?;

        Ok(Trail::new(name, lat, lon, difficulty, length_km))
    }
}

/// Query parameters for listing trails.
///
/// Values arrive as raw strings; empty values count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct TrailQuery {
    pub name: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,

    #[serde(rename = "radius-km")]
    pub radius_km: Option<String>,

    pub difficulty: Option<String>,

    #[serde(rename = "length-km")]
    pub length_km: Option<String>,
}

/// A query parameter could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("invalid {param}: {source}")]
    Number {
        param: &'static str,
        source: ParseFloatError,
    },

    #[error(transparent)]
    Difficulty(#[from] InvalidDifficulty),
}

impl TrailQuery {
    /// Parse the raw parameters into a typed filter.
    ///
    /// The result is not yet validated; the store checks it before use.
    pub fn into_filter(self) -> Result<TrailFilter, QueryError> {
        Ok(TrailFilter {
            name: present(self.name),
            latitude: parse_number("lat", self.lat)?,
            longitude: parse_number("lon", self.lon)?,
            radius_km: parse_number("radius-km", self.radius_km)?,
            difficulty: present(self.difficulty)
                .map(|d| d.parse::<Difficulty>())
                .transpose()?,
            length_km: parse_number("length-km", self.length_km)?,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_number(param: &'static str, value: Option<String>) -> Result<Option<f64>, QueryError> {
    present(value)
        .map(|v| v.trim().parse::<f64>())
        .transpose()
        .map_err(|source| QueryError::Number { param, source })
}

/// A trail in responses.
#[derive(Debug, Serialize)]
pub struct TrailResult {
    pub trail_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub difficulty: Difficulty,
    pub length_km: f64,

    /// RFC 3339 creation time
    pub created_at: String,
}

impl From<&Trail> for TrailResult {
    fn from(trail: &Trail) -> Self {
        Self {
            trail_id: trail.id.to_string(),
            name: trail.name.clone(),
            lat: trail.latitude,
            lon: trail.longitude,
            difficulty: trail.difficulty,
            length_km: trail.length_km,
            created_at: trail.created_at.to_rfc3339(),
        }
    }
}

/// Response for trail listing.
#[derive(Debug, Serialize)]
pub struct ListTrailsResponse {
    pub trails: Vec<TrailResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> TrailRequest {
        TrailRequest {
            name: Some("Test Trail".to_string()),
            lat: Some(45.5231),
            lon: Some(-122.6765),
            difficulty: Some("medium".to_string()),
            length_km: Some(10.5),
        }
    }

    #[test]
    fn request_into_trail() {
        let trail = full_request().into_trail().unwrap();
        assert_eq!(trail.name, "Test Trail");
        assert_eq!(trail.latitude, 45.5231);
        assert_eq!(trail.longitude, -122.6765);
        assert_eq!(trail.difficulty, Difficulty::Medium);
        assert_eq!(trail.length_km, 10.5);
    }

    #[test]
    fn missing_fields_are_named() {
        let cases: [(fn(&mut TrailRequest), ValidationError); 7] = [
            (|r: &mut TrailRequest| r.name = None, ValidationError::NameRequired),
            (
                |r: &mut TrailRequest| r.name = Some(String::new()),
                ValidationError::NameRequired,
            ),
            (|r: &mut TrailRequest| r.lat = None, ValidationError::LatitudeRequired),
            (|r: &mut TrailRequest| r.lon = None, ValidationError::LongitudeRequired),
            (
                |r: &mut TrailRequest| r.difficulty = None,
                ValidationError::DifficultyRequired,
            ),
            (
                |r: &mut TrailRequest| r.difficulty = Some("invalid".to_string()),
                ValidationError::InvalidDifficulty,
            ),
            (|r: &mut TrailRequest| r.length_km = None, ValidationError::LengthRequired),
        ];

        for (mutate, expected) in cases {
            let mut request = full_request();
            mutate(&mut request);
            assert_eq!(request.into_trail().unwrap_err(), expected);
        }
    }

    #[test]
    fn request_deserializes_from_json() {
        let json = r#"{"name":"Angel's Rest","lat":45.6,"lon":-122.3,"difficulty":"hard","length_km":7.7}"#;
        let request: TrailRequest = serde_json::from_str(json).unwrap();
        let trail = request.into_trail().unwrap();
        assert_eq!(trail.difficulty, Difficulty::Hard);
    }

    #[test]
    fn empty_query_is_empty_filter() {
        let filter = TrailQuery::default().into_filter().unwrap();
        assert_eq!(filter, TrailFilter::default());
    }

    #[test]
    fn empty_values_are_absent() {
        let query = TrailQuery {
            name: Some(String::new()),
            lat: Some(String::new()),
            difficulty: Some(String::new()),
            ..TrailQuery::default()
        };
        assert_eq!(query.into_filter().unwrap(), TrailFilter::default());
    }

    #[test]
    fn query_parses_every_field() {
        let query = TrailQuery {
            name: Some("Test Trail".to_string()),
            lat: Some("45.5".to_string()),
            lon: Some("-122.6".to_string()),
            radius_km: Some("10".to_string()),
            difficulty: Some("easy".to_string()),
            length_km: Some("3.25".to_string()),
        };

        let filter = query.into_filter().unwrap();
        assert_eq!(filter.name.as_deref(), Some("Test Trail"));
        assert_eq!(filter.latitude, Some(45.5));
        assert_eq!(filter.longitude, Some(-122.6));
        assert_eq!(filter.radius_km, Some(10.0));
        assert_eq!(filter.difficulty, Some(Difficulty::Easy));
        assert_eq!(filter.length_km, Some(3.25));
    }

    #[test]
    fn malformed_number_names_parameter() {
        let query = TrailQuery {
            radius_km: Some("far".to_string()),
            ..TrailQuery::default()
        };
        let err = query.into_filter().unwrap_err();
        assert!(err.to_string().starts_with("invalid radius-km: "), "{err}");
    }

    #[test]
    fn unknown_difficulty_rejected() {
        let query = TrailQuery {
            difficulty: Some("extreme".to_string()),
            ..TrailQuery::default()
        };
        let err = query.into_filter().unwrap_err();
        assert_eq!(err.to_string(), "invalid difficulty: extreme");
    }

    #[test]
    fn trail_result_fields() {
        let trail = Trail::new("Test Trail", 45.5, -122.6, Difficulty::Hard, 4.0);
        let json = serde_json::to_value(TrailResult::from(&trail)).unwrap();

        assert_eq!(json["trail_id"], trail.id.to_string());
        assert_eq!(json["name"], "Test Trail");
        assert_eq!(json["lat"], 45.5);
        assert_eq!(json["lon"], -122.6);
        assert_eq!(json["difficulty"], "hard");
        assert_eq!(json["length_km"], 4.0);
        assert_eq!(json["created_at"], trail.created_at.to_rfc3339());
    }
}
