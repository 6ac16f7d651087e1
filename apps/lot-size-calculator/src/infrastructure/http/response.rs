//! HTTP response types.

use axum::{Json, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HttpErrorResponse, ServiceError};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
    /// Current time.
    pub current_time: DateTime<Utc>,
}

/// API error rendered as a JSON [`HttpErrorResponse`] body.
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl ApiError {
    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(ServiceError::invalid_request(message))
    }

    /// The wrapped error.
    #[must_use]
    pub const fn error(&self) -> &ServiceError {
        &self.0
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.code().http_status();
        let body: HttpErrorResponse = self.0.to_http_response();
        (status, Json(body)).into_response()
    }
}
