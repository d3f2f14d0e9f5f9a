//! Trail storage.
//!
//! Trails live in memory for the lifetime of the process. The store owns the
//! collection outright; callers only ever receive clones.

mod error;
mod trail_store;


pub use error::StoreError;
pub use trail_store::{DUPLICATE_RADIUS_KM, TrailStore};
