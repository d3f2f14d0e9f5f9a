//! Domain types for the trail data service.
//!
//! This module contains trails, the filters that select them, and the
//! geographic arithmetic both rely on. Validation lives here so that the
//! store and the web layer share a single definition of a valid trail.

mod error;
mod filter;
mod geo;
mod trail;

pub use error::{FilterError, ValidationError};
pub use filter::{Proximity, TrailFilter, matches};
pub use geo::{Coordinate, EARTH_RADIUS_KM, haversine_km};
pub use trail::{Difficulty, InvalidDifficulty, InvalidTrailId, Trail, TrailId};
