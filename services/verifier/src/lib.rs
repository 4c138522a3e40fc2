//! Skeptic verification service
//!
//! Serves `POST /api/verify`, which asks a vision model whether a photo
//! proves a task was done, plus read-only endpoints over the demo lobby
//! dataset.

pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod state;
pub mod verdict;
pub mod vision;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/verify", post(api::verify::verify))
        .route("/api/lobbies", get(api::lobbies::list_lobbies))
        .route("/api/lobbies/:id", get(api::lobbies::get_lobby))
        .route("/api/history", get(api::lobbies::history))
        .route("/api/stats", get(api::lobbies::user_stats))
        .route("/api/me", get(api::lobbies::current_user))
        .with_state(state)
}
