use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::models::{ApiError, ChatRequest, ChatResponse};
use crate::state::AppState;

pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ApiError>)> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected chat request");
        ApiError::new(rejection.status(), rejection.body_text())
    })?;

    info!(message = %req.message, "CHAT request");

    let result = state.classifier.classify(&req.message);

    info!(intent = ?result.interpreted_intent, "CHAT complete");
    Ok(Json(ChatResponse::from(result)))
}
