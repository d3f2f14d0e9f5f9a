//! In-memory trail repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::domain::{Trail, TrailFilter, TrailId, matches};

use super::error::StoreError;

/// Radius of the duplicate check run on create, in kilometres.
pub const DUPLICATE_RADIUS_KM: f64 = 25.0;

/// Thread-safe trail repository keyed by id.
///
/// Reads share the lock; writes take it exclusively. Validation runs before
/// the lock is taken. `create` holds a single write guard across the
/// duplicate scan and the insert, so two racing creates of the same trail
/// cannot both succeed.
#[derive(Debug, Default)]
pub struct TrailStore {
    trails: RwLock<HashMap<TrailId, Trail>>,
}

impl TrailStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a new trail.
    ///
    /// Rejects the trail if one with the same name already lies within
    /// [`DUPLICATE_RADIUS_KM`] of it. Returns the stored trail.
    pub fn create(&self, trail: Trail) -> Result<Trail, StoreError> {
        trail.validate()?;

        let duplicate_filter =
            TrailFilter::near_named(trail.name.clone(), trail.start(), DUPLICATE_RADIUS_KM);

        let mut trails = self.write();
        if trails.values().any(|t| duplicate_filter.matches(t)) {
            info!(name = %trail.name, "rejected duplicate trail");
            return Err(StoreError::Duplicate);
        }
        trails.insert(trail.id, trail.clone());
        drop(trails);

        debug!(id = %trail.id, name = %trail.name, "created trail");
        Ok(trail)
    }

    /// Look up a trail by id.
    pub fn get(&self, id: &TrailId) -> Result<Trail, StoreError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))
    }

    /// Every trail matching `filter`, in no particular order.
    ///
    /// An absent filter returns every trail. The filter is validated first.
    pub fn list(&self, filter: Option<&TrailFilter>) -> Result<Vec<Trail>, StoreError> {
        if let Some(filter) = filter {
            filter.validate()?;
        }

        let trails = self.read();
        Ok(trails
            .values()
            .filter(|t| matches(t, filter))
            .cloned()
            .collect())
    }

    /// Re-save a trail under its id, returning the trail it replaced.
    ///
    /// Skips validation and the duplicate check; callers validate first.
    pub fn update(&self, trail: Trail) -> Option<Trail> {
        let id = trail.id;
        let previous = self.write().insert(id, trail);
        debug!(%id, replaced = previous.is_some(), "saved trail");
        previous
    }

    /// Replace the fields of an existing trail, keeping its creation time.
    ///
    /// Validates first. Fails with `NotFound` if no trail has `trail.id`; the
    /// existence check and the write happen under one guard, so a concurrent
    /// delete is never undone.
    pub fn replace(&self, mut trail: Trail) -> Result<Trail, StoreError> {
        trail.validate()?;

        let mut trails = self.write();
        let existing = trails
            .get(&trail.id)
            .ok_or(StoreError::NotFound(trail.id))?;
        trail.created_at = existing.created_at;
        trails.insert(trail.id, trail.clone());
        drop(trails);

        debug!(id = %trail.id, "replaced trail");
        Ok(trail)
    }

    /// Remove a trail, returning it.
    pub fn delete(&self, id: &TrailId) -> Result<Trail, StoreError> {
        let removed = self.write().remove(id).ok_or(StoreError::NotFound(*id))?;
        debug!(%id, "deleted trail");
        Ok(removed)
    }

    /// Remove every trail.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Number of stored trails.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no trails.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Nothing run under the lock can panic midway through a map mutation,
    // so a poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TrailId, Trail>> {
        self.trails.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TrailId, Trail>> {
        self.trails.write().unwrap_or_else(PoisonError::into_inner)
    }
}
