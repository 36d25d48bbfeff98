use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use logai_core::LogRecord;
use std::sync::Arc;
use tracing::{info, warn};

use crate::models::{ApiError, LogsQuery};
use crate::state::AppState;

pub async fn get_logs(
    State(state): State<Arc<AppState>>,
    params: Result<Query<LogsQuery>, QueryRejection>,
) -> Result<Json<Vec<LogRecord>>, (StatusCode, Json<ApiError>)> {
    let Query(params) = params.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected logs request");
        ApiError::new(rejection.status(), rejection.body_text())
    })?;

    info!(query = ?params.q, limit = params.limit, "Logs request");

    let logs = state
        .store
        .query(params.q.as_deref(), params.effective_limit());

    info!(results = logs.len(), "Logs returned");
    Ok(Json(logs))
}
