use serde::{Deserialize, Serialize};

/// Result of a single BMI calculation as returned by `POST /calculate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Body mass index, rounded by the server
    pub bmi: f64,

    /// Category name (e.g. "Normal weight")
    pub category: String,

    /// CSS colour associated with the category
    pub color: String,
}

/// One past calculation as returned by `GET /history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Server-side identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Weight submitted for this calculation, in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Height stored for this calculation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    pub bmi: f64,
    pub category: String,
    pub color: String,

    /// When the calculation was stored. Opaque to the client.
    pub timestamp: String,
}

impl HistoryEntry {
    /// Build an entry carrying only the fields the page renders
    pub fn new(bmi: f64, category: &str, color: &str, timestamp: &str) -> Self {
        Self {
            id: None,
            weight: None,
            height: None,
            bmi,
            category: category.to_string(),
            color: color.to_string(),
            timestamp: timestamp.to_string(),
        }
    }
}

/// Body of a non-200 response from `POST /calculate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerError {
    pub error: String,
}
