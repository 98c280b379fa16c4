use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid workout type: {0}")]
    InvalidCategory(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Recommendation service is unavailable")]
    ServiceUnavailable,
    #[error("Recommendation service error: {message}")]
    Upstream { status: u16, message: String },
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingField(_)
            | GatewayError::InvalidCategory(_)
            | GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            GatewayError::Internal(e) => tracing::error!("Request failed: {:#}", e),
            GatewayError::ServiceUnavailable | GatewayError::Upstream { .. } => {
                tracing::warn!("Upstream failure: {}", self)
            }
            _ => tracing::debug!("Rejected request: {}", self),
        }

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
