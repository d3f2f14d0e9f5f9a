//! Web layer for the trail data service.
//!
//! Provides HTTP endpoints for logging in and managing trails.

mod dto;
mod routes;
mod state;


pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
