use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Body POSTed to `/api/echo`. camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoRequest {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub random_number: u32,
}

impl EchoRequest {
    /// Fresh request-scoped payload: caller's greeting, current UTC time,
    /// and a pseudo-random integer in [0, 1000).
    pub fn synthesized(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
            random_number: rand::thread_rng().gen_range(0..1000),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoResponse {
    pub status: String,
    pub received: serde_json::Value,
}

/// Body POSTed to `/api/search-keyword`. An empty `keyword` with
/// `use_custom: false` tells the backend to use its spreadsheet default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub use_custom: bool,
    pub keyword: String,
}

/// The backend marks success with this literal in the `status` field.
pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<SearchResults>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub keyword: String,
    pub total_urls: u32,
    pub matches_found: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    #[serde(default)]
    pub urls_with_keyword: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_request_serializes_camel_case() {
        let request = EchoRequest {
            message: "hi".to_string(),
            timestamp: "2024-01-01T00:00:00Z".parse().expect("timestamp"),
            random_number: 42,
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["message"], "hi");
        assert_eq!(value["randomNumber"], 42);
        assert_eq!(value["timestamp"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn synthesized_echo_request_stays_in_random_range() {
        for _ in 0..50 {
            let request = EchoRequest::synthesized("greeting");
            assert!(request.random_number < 1000);
        }
    }

    #[test]
    fn search_results_tolerate_missing_optional_fields() {
        let raw = r#"{"keyword":"rust","total_urls":10,"matches_found":3}"#;
        let results: SearchResults = serde_json::from_str(raw).expect("decode");
        assert_eq!(results.keyword, "rust");
        assert_eq!(results.success_rate, None);
        assert!(results.urls_with_keyword.is_empty());
    }

    #[test]
    fn search_error_envelope_decodes_without_results() {
        let raw = r#"{"status":"error","message":"no URLs found"}"#;
        let response: SearchResponse = serde_json::from_str(raw).expect("decode");
        assert_ne!(response.status, STATUS_SUCCESS);
        assert_eq!(response.message, "no URLs found");
        assert!(response.results.is_none());
    }
}
