//! Application state for the web layer.

use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::store::TrailStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Trail repository
    pub store: Arc<TrailStore>,

    /// Token minting and verification
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: TrailStore, tokens: TokenIssuer) -> Self {
        Self {
            store: Arc::new(store),
            tokens: Arc::new(tokens),
        }
    }
}
