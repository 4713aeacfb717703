use axum::{
    Json,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::foundation::error::CanvasError;

/// Handler error: a [`CanvasError`] rendered as a JSON error response.
#[derive(Debug)]
pub struct ApiError(pub CanvasError);

impl From<CanvasError> for ApiError {
    fn from(e: CanvasError) -> Self {
        Self(e)
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        let msg = rejection.body_text();
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self(CanvasError::too_large(msg))
        } else {
            Self(CanvasError::validation(msg))
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            CanvasError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            CanvasError::NotFound(_) => StatusCode::NOT_FOUND,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn category(&self) -> &'static str {
        match &self.0 {
            CanvasError::Parse { .. } => "parse",
            CanvasError::Shape { .. } => "shape",
            CanvasError::Validation(_) => "validation",
            CanvasError::InvalidId(_) => "invalid_id",
            CanvasError::NotFound(_) => "not_found",
            CanvasError::TooLarge(_) => "too_large",
            CanvasError::Storage(_) => "storage",
            CanvasError::Other(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }

        let body = serde_json::json!({
            "error": {
                "category": self.category(),
                "message": self.0.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}
