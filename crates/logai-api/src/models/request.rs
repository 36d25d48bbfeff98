use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub q: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

impl LogsQuery {
    /// Negative limits are clamped to zero rather than rejected
    pub fn effective_limit(&self) -> usize {
        usize::try_from(self.limit.max(0)).unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}
