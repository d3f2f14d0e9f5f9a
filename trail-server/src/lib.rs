//! Trail data service.
//!
//! An HTTP record store for geographic trails. Trails are kept in memory,
//! filtered by exact fields and by great-circle proximity, and guarded by
//! bearer tokens minted at `/login`.

pub mod auth;
pub mod domain;
pub mod settings;
pub mod store;
pub mod web;
