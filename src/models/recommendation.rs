use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Exercise;

/// Body of `POST /api/recommend` and its legacy alias
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecommendationRequest {
    pub workout_type: Option<String>,
    pub difficulty_level: Option<String>,
}

/// Response wrapper for catalog recommendations
#[derive(Debug, Serialize)]
pub struct CatalogRecommendationResponse {
    pub success: bool,
    pub recommendations: Vec<Exercise>,
}

/// Body of `POST /api/recommendations`.
///
/// Fields stay untyped here so numeric strings can be accepted and anything
/// else reported as invalid input rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRequest {
    pub age: Option<Value>,
    pub height: Option<Value>,
    pub weight: Option<Value>,
}

/// Validated numeric profile forwarded to the recommendation service
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyProfile {
    pub age: f64,
    pub height: f64,
    pub weight: f64,
}

/// Health payload returned by the recommendation service
#[derive(Debug, Deserialize)]
pub struct UpstreamHealth {
    pub status: Option<Value>,
}

impl UpstreamHealth {
    /// Status as reported to clients; non-string values are rendered as JSON
    pub fn status_label(&self) -> String {
        match &self.status {
            Some(Value::String(status)) => status.clone(),
            None | Some(Value::Null) => "unknown".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Combined liveness report for the gateway and the recommendation service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub express_server: String,
    pub python_server: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn online(upstream_status: String) -> Self {
        Self {
            express_server: "ok".to_string(),
            python_server: upstream_status,
            error: None,
        }
    }

    pub fn offline(reason: String) -> Self {
        Self {
            express_server: "ok".to_string(),
            python_server: "offline".to_string(),
            error: Some(reason),
        }
    }
}
