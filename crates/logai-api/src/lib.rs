//! HTTP layer for the log analytics mock backend.
//!
//! Pure dispatcher: every request is answered from the shared, read-only
//! [`state::AppState`].

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/logs", get(handlers::get_logs))
        .route("/api/logs/", get(handlers::get_logs))
        .route("/api/chat", post(handlers::chat))
        .route("/api/chat/", post(handlers::chat))
        .layer(middleware::cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
