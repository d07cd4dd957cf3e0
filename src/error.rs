//! Errors raised while building page models.
//!
//! Records themselves cannot fail; only the mapping helpers and the JSON
//! hand-off can. [`ModelError`] renders as the JSON error body the front-end
//! already understands:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::model::FieldError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A dataset id, edition or version cannot be used as a URL path segment.
    #[error("Invalid path segment: {segment:?}")]
    InvalidPathSegment { segment: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Failed to serialize page: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    fn code(&self) -> &'static str {
        match self {
            ModelError::InvalidPathSegment { .. } => "invalid_path_segment",
            ModelError::Validation(_) => "validation_error",
            ModelError::Serialization(_) => "internal_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ModelError::InvalidPathSegment { .. } | ModelError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ModelError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Value {
        match self {
            ModelError::InvalidPathSegment { segment } => json!({ "segment": segment }),
            ModelError::Validation(errors) => json!({ "fields": FieldError::from_validation(errors) }),
            ModelError::Serialization(_) => json!({}),
        }
    }
}

impl IntoResponse for ModelError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Page model could not be rendered");
        }

        let message = match &self {
            // Serializer internals stay in the logs.
            ModelError::Serialization(_) => "Failed to render page".to_string(),
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message,
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_segment_maps_to_bad_request() {
        let err = ModelError::InvalidPathSegment {
            segment: "../etc".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "invalid_path_segment");
        assert_eq!(err.details()["segment"], "../etc");
    }

    #[test]
    fn test_serialization_error_is_internal() {
        let source = serde_json::from_str::<Value>("{").unwrap_err();
        let err = ModelError::from(source);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
