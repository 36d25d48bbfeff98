use axum::{Json, http::StatusCode};
use logai_intent::ChatResult;
use serde::Serialize;

/// JSON error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: u16,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (status, Json(Self {
            error: message.into(),
            code: status.as_u16(),
        }))
    }
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub action: ChatResult,
}

impl From<ChatResult> for ChatResponse {
    fn from(action: ChatResult) -> Self {
        Self {
            response: action.explanation.clone(),
            action,
        }
    }
}
