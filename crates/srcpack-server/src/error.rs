//! API error types and error response payloads.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

/// Error detail returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Stable error code identifier.
    pub error_code: String,
    /// Human readable message.
    pub message: String,
}

/// Error response wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    /// Error detail.
    pub error: ApiErrorDetail,
}

/// API error type.
///
/// The download endpoint has no documented client-error cases; anything
/// that goes wrong while building the archive surfaces as a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Internal error.
    #[error("{message}")]
    Internal {
        /// Human readable message.
        message: String,
    },
}

impl From<srcpack_core::BundleError> for ApiError {
    fn from(err: srcpack_core::BundleError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        };

        let message = self.to_string();
        tracing::error!(error_code, %message, "request failed");

        let payload = ApiErrorResponse {
            error: ApiErrorDetail {
                error_code: error_code.to_string(),
                message,
            },
        };

        (status, axum::Json(payload)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_is_500() {
        let response = ApiError::Internal {
            message: "boom".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bundle_error_converts() {
        let err = srcpack_core::BundleError::InvalidCompressionLevel { level: 0 };
        let api: ApiError = err.into();
        assert!(api.to_string().contains("compression level"));
    }
}
