//! # REST API Router
//!
//! Axum router over the entity endpoints.

use std::sync::Arc;

use axum::Router;

use crate::store::Store;

use super::{students, subjects, teachers};

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
}

/// Shared state type
pub type SharedState = Arc<AppState>;

/// REST API server state
pub struct RestServer {
    state: SharedState,
}

impl RestServer {
    /// Share state with routers built elsewhere
    pub fn with_state(state: SharedState) -> Self {
        Self { state }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .merge(students::routes())
            .merge(teachers::routes())
            .merge(subjects::routes())
            .with_state(self.state)
    }
}
