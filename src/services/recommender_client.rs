use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::GatewayError;
use crate::models::{BodyProfile, HealthReport, ProfileRequest, UpstreamHealth};

/// Time allowed for the recommendation service's health endpoint to answer
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Response relayed from the recommendation service
#[derive(Debug, Clone, PartialEq)]
pub struct RelayedResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Client for the remote recommendation service.
///
/// Requests are sent once; failures are classified and returned to the caller
/// without retrying.
#[derive(Clone)]
pub struct RecommenderClient {
    client: Client,
    base_url: String,
}

impl RecommenderClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // No client-wide timeout: only the health probe is bounded.
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate a numeric profile and forward it to `POST /api/recommend`
    pub async fn forward_profile(&self, request: &ProfileRequest) -> Result<RelayedResponse, GatewayError> {
        let profile = parse_profile(request)?;
        let url = format!("{}/api/recommend", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&profile)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Recommendation service request failed: {} - {}", status, error_text);
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                message: upstream_message(status, &error_text),
            });
        }

        let body = response
            .json::<Value>()
            .await
            .context("Failed to parse recommendation service response")?;

        debug!("Relayed recommendation service response with status {}", status);

        Ok(RelayedResponse { status, body })
    }

    /// Probe the recommendation service's health endpoint. Never fails; any
    /// problem is folded into the report.
    pub async fn check_health(&self) -> HealthReport {
        match self.upstream_status().await {
            Ok(status) => HealthReport::online(status),
            Err(e) => {
                warn!("Recommendation service health check failed: {:#}", e);
                HealthReport::offline(format!("{:#}", e))
            }
        }
    }

    async fn upstream_status(&self) -> Result<String> {
        let url = format!("{}/api/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await
            .context("Failed to reach recommendation service")?;

        if !response.status().is_success() {
            anyhow::bail!("Recommendation service responded with {}", response.status());
        }

        let health = response
            .json::<UpstreamHealth>()
            .await
            .context("Failed to parse recommendation service health")?;

        Ok(health.status_label())
    }
}

/// Check that age, height and weight are all present and numeric
pub fn parse_profile(request: &ProfileRequest) -> Result<BodyProfile, GatewayError> {
    match (
        numeric(request.age.as_ref()),
        numeric(request.height.as_ref()),
        numeric(request.weight.as_ref()),
    ) {
        (Some(age), Some(height), Some(weight)) => Ok(BodyProfile { age, height, weight }),
        _ => Err(GatewayError::InvalidInput(
            "age, height, and weight must be valid numbers".to_string(),
        )),
    }
}

fn numeric(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    number.is_finite().then_some(number)
}

fn classify_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_connect() {
        warn!("Recommendation service unreachable: {}", err);
        GatewayError::ServiceUnavailable
    } else {
        GatewayError::Internal(anyhow::Error::new(err).context("Recommendation service request failed"))
    }
}

fn upstream_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["error", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str).map(str::to_string))
    });

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status.canonical_reason().unwrap_or("Unknown error").to_string(),
    }
}
