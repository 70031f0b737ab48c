use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why a fetch produced no data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Endpoint could not be turned into a request URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Request could not be completed (connection, DNS, body read)
    #[error("Request failed: {0}")]
    Request(String),
    /// Server answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    /// Body was not valid JSON, or not the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Transport problems, as opposed to a body that would not decode
    pub fn is_transport(&self) -> bool {
        !matches!(self, FetchError::Decode(_))
    }
}

/// Response from GET /api/mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodData {
    pub dates: Vec<String>,
    pub mood_levels: Vec<f64>,
    pub stats: MoodStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodStats {
    pub average: f64,
    pub median: f64,
    pub std: f64,
}

/// Response from GET /api/time
///
/// Durations and hours are passed through as the backend renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeData {
    pub categories: Vec<String>,
    pub durations: Vec<Value>,
    pub hours: Vec<Value>,
    pub activity: Vec<f64>,
    pub stats: TimeStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeStats {
    pub total_time: String,
    pub avg_time: String,
    pub peak_hours: Value,
}

/// Response from GET /api/daily
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyData {
    pub dates: Vec<String>,
    pub activity_levels: Vec<f64>,
    pub stats: DailyStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub average: f64,
    pub peak_days: Vec<String>,
    pub trend: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = FetchError::Http { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert!(err.is_transport());
        assert!(!FetchError::Decode("eof".to_string()).is_transport());
    }

    #[test]
    fn test_daily_payload_shape() {
        let body = r#"{
            "dates": ["2024-01-01", "2024-01-02"],
            "activity_levels": [3, 5.5],
            "stats": {"average": 4.25, "peak_days": ["2024-01-02"], "trend": "растущий"}
        }"#;

        let daily: DailyData = serde_json::from_str(body).expect("parse daily");
        assert_eq!(daily.activity_levels, vec![3.0, 5.5]);
        assert_eq!(daily.stats.peak_days, vec!["2024-01-02".to_string()]);
        assert_eq!(daily.stats.trend, "растущий");
    }

    #[test]
    fn test_time_payload_keeps_raw_values() {
        let body = r#"{
            "categories": ["work", "sleep"],
            "durations": ["0 days 02:00:00", "0 days 08:00:00"],
            "hours": [9, 23],
            "activity": [1.0, 0.5],
            "stats": {"total_time": "0 days 10:00:00", "avg_time": "0 days 05:00:00", "peak_hours": 9}
        }"#;

        let time: TimeData = serde_json::from_str(body).expect("parse time");
        assert_eq!(time.hours[1], serde_json::json!(23));
        assert_eq!(time.stats.peak_hours, serde_json::json!(9));
    }
}
