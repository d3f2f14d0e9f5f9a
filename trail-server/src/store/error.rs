//! Store error types.

use crate::domain::{FilterError, TrailId, ValidationError};

/// Errors returned by [`TrailStore`](super::TrailStore) operations.
///
/// None of these leave the store partially modified.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The trail failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The list filter failed validation
    #[error(transparent)]
    InvalidFilter(#[from] FilterError),

    /// A trail with the same name already exists nearby
    #[error("trail already exists")]
    Duplicate,

    /// No trail has this id
    #[error("trail not found")]
    NotFound(TrailId),
}
