//! Domain error types.
//!
//! These errors represent validation failures of trails and filters.
//! Every message is user-facing and names the offending field.

/// A trail field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("trail name is required")]
    NameRequired,

    #[error("trail start latitude is required")]
    LatitudeRequired,

    #[error("trail start latitude must be between -90 and 90")]
    LatitudeOutOfRange,

    #[error("trail start longitude is required")]
    LongitudeRequired,

    #[error("trail start longitude must be between -180 and 180")]
    LongitudeOutOfRange,

    #[error("trail difficulty is required")]
    DifficultyRequired,

    #[error("trail difficulty must be easy, medium, or hard")]
    InvalidDifficulty,

    #[error("trail length is required")]
    LengthRequired,

    #[error("trail length must be positive")]
    NegativeLength,
}

/// A trail filter failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("invalid empty name filter")]
    EmptyName,

    #[error("invalid lat filter outside of bounds -90 to 90")]
    LatitudeOutOfRange,

    #[error("invalid lon filter outside of bounds -180 to 180")]
    LongitudeOutOfRange,

    #[error("invalid radius filter must be positive")]
    NegativeRadius,

    /// Latitude and longitude given without a radius
    #[error("invalid missing radius filter")]
    MissingRadius,

    /// Latitude given without longitude
    #[error("invalid missing lon filter")]
    MissingLongitude,

    /// Longitude given without latitude
    #[error("invalid missing lat filter")]
    MissingLatitude,

    /// Radius given with neither latitude nor longitude
    #[error("invalid missing lat or lon filter")]
    MissingCenter,

    #[error("invalid length filter must be positive")]
    NegativeLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::NameRequired;
        assert_eq!(err.to_string(), "trail name is required");

        let err = ValidationError::LatitudeOutOfRange;
        assert_eq!(
            err.to_string(),
            "trail start latitude must be between -90 and 90"
        );

        let err = ValidationError::InvalidDifficulty;
        assert_eq!(
            err.to_string(),
            "trail difficulty must be easy, medium, or hard"
        );

        let err = ValidationError::NegativeLength;
        assert_eq!(err.to_string(), "trail length must be positive");
    }

    #[test]
    fn filter_error_display() {
        assert_eq!(
            FilterError::MissingLongitude.to_string(),
            "invalid missing lon filter"
        );
        assert_eq!(
            FilterError::MissingLatitude.to_string(),
            "invalid missing lat filter"
        );
        assert_eq!(
            FilterError::MissingRadius.to_string(),
            "invalid missing radius filter"
        );
        assert_eq!(
            FilterError::MissingCenter.to_string(),
            "invalid missing lat or lon filter"
        );
        assert_eq!(
            FilterError::NegativeRadius.to_string(),
            "invalid radius filter must be positive"
        );
    }
}
