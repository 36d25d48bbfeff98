mod chat;
mod logs;

pub use chat::*;
pub use logs::*;

use axum::Json;

use crate::models::RootResponse;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Log Analytics Agent API is running",
    })
}
