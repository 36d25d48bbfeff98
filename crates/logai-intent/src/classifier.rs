// Intent Classifier - maps a chat message to a canned log filter
//
// Keyword stub, no model behind it. Checks run in priority order and the
// first hit wins.

use logai_core::LogLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    FilterLogs,    // "database failed" → level filter
    SearchLogs,    // "login history" → fixed keyword
    GeneralSearch, // anything else → whole message as keyword
    Unknown,       // initial default, never produced by classify()
}

impl Default for Intent {
    fn default() -> Self {
        Intent::Unknown
    }
}

/// Structured query carried by a chat result, one shape per intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedQuery {
    Level { level: LogLevel },
    Keyword { keyword: String },
    Empty {},
}

impl GeneratedQuery {
    /// Term a client can feed back into the log query: keyword first, then level.
    pub fn search_term(&self) -> Option<&str> {
        match self {
            Self::Keyword { keyword } => Some(keyword.as_str()),
            Self::Level { level } => Some(level.as_str()),
            Self::Empty {} => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    pub original_query: String,
    pub interpreted_intent: Intent,
    pub generated_query: GeneratedQuery,
    pub explanation: String,
}

impl ChatResult {
    /// The "no idea" result. Kept for completeness of the intent set.
    pub fn unrecognized(text: &str) -> Self {
        Self {
            original_query: text.to_string(),
            interpreted_intent: Intent::Unknown,
            generated_query: GeneratedQuery::Empty {},
            explanation: "I'm not sure what you mean.".to_string(),
        }
    }
}

pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, text: &str) -> ChatResult {
        let text_lower = text.to_lowercase();

        let (intent, generated_query, explanation) =
            if text_lower.contains("failed") || text_lower.contains("error") {
                (
                    Intent::FilterLogs,
                    GeneratedQuery::Level { level: LogLevel::Error },
                    "Filtering for logs with ERROR level.".to_string(),
                )
            } else if text_lower.contains("login") {
                (
                    Intent::SearchLogs,
                    GeneratedQuery::Keyword { keyword: "login".to_string() },
                    "Searching for logs containing 'login'.".to_string(),
                )
            } else {
                (
                    Intent::GeneralSearch,
                    GeneratedQuery::Keyword { keyword: text.to_string() },
                    format!("Searching for logs containing '{}'.", text),
                )
            };

        debug!(intent = ?intent, "Message classified");

        ChatResult {
            original_query: text.to_string(),
            interpreted_intent: intent,
            generated_query,
            explanation,
        }
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_words_filter_by_level() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("Database connection failed");
        assert_eq!(result.interpreted_intent, Intent::FilterLogs);
        assert_eq!(result.generated_query, GeneratedQuery::Level { level: LogLevel::Error });
        assert_eq!(result.explanation, "Filtering for logs with ERROR level.");

        let result = classifier.classify("any ERRORS today?");
        assert_eq!(result.interpreted_intent, Intent::FilterLogs);
    }

    #[test]
    fn test_login_searches_fixed_keyword() {
        let classifier = IntentClassifier::new();
        let result = classifier.classify("check login history");
        assert_eq!(result.interpreted_intent, Intent::SearchLogs);
        assert_eq!(
            result.generated_query,
            GeneratedQuery::Keyword { keyword: "login".to_string() }
        );
        assert_eq!(result.explanation, "Searching for logs containing 'login'.");
    }

    #[test]
    fn test_fallback_keeps_original_casing() {
        let classifier = IntentClassifier::new();
        let result = classifier.classify("Show me SLOW jobs");
        assert_eq!(result.interpreted_intent, Intent::GeneralSearch);
        assert_eq!(
            result.generated_query,
            GeneratedQuery::Keyword { keyword: "Show me SLOW jobs".to_string() }
        );
        assert_eq!(result.explanation, "Searching for logs containing 'Show me SLOW jobs'.");
        assert_eq!(result.original_query, "Show me SLOW jobs");
    }

    #[test]
    fn test_failed_beats_login() {
        let classifier = IntentClassifier::new();
        let result = classifier.classify("LOGIN FAILED");
        assert_eq!(result.interpreted_intent, Intent::FilterLogs);
        assert_eq!(result.generated_query, GeneratedQuery::Level { level: LogLevel::Error });
    }

    #[test]
    fn test_empty_message_is_general_search() {
        let result = IntentClassifier::new().classify("");
        assert_eq!(result.interpreted_intent, Intent::GeneralSearch);
        assert_eq!(result.generated_query, GeneratedQuery::Keyword { keyword: String::new() });
        assert_eq!(result.explanation, "Searching for logs containing ''.");
    }

    #[test]
    fn test_wire_shape() {
        let result = IntentClassifier::new().classify("error");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "original_query": "error",
                "interpreted_intent": "filter_logs",
                "generated_query": {"level": "ERROR"},
                "explanation": "Filtering for logs with ERROR level."
            })
        );

        let unknown = serde_json::to_value(ChatResult::unrecognized("??")).unwrap();
        assert_eq!(unknown["interpreted_intent"], "unknown");
        assert_eq!(unknown["generated_query"], json!({}));
    }

    #[test]
    fn test_generated_query_parses_back() {
        let parsed: GeneratedQuery = serde_json::from_value(json!({"keyword": "cache"})).unwrap();
        assert_eq!(parsed.search_term(), Some("cache"));

        let parsed: GeneratedQuery = serde_json::from_value(json!({"level": "ERROR"})).unwrap();
        assert_eq!(parsed, GeneratedQuery::Level { level: LogLevel::Error });
        assert_eq!(parsed.search_term(), Some("ERROR"));

        let parsed: GeneratedQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.search_term(), None);
        assert_eq!(Intent::default(), Intent::Unknown);
    }
}
