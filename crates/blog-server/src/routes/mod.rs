//! Route definitions for the HTTP API.

pub mod authors;
pub mod health;
pub mod posts;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(authors::routes())
        .merge(posts::routes())
        .with_state(state)
}
