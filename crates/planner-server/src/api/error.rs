use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use planner_core::error::CoreError;
use thiserror::Error;

/// Failure of an API request, rendered as `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Core(err) => match err {
                CoreError::InvalidInput(_) | CoreError::InvalidRule(_) => StatusCode::BAD_REQUEST,
                CoreError::NotFound(_) => StatusCode::NOT_FOUND,
                CoreError::CorruptDate { .. }
                | CoreError::Database(_)
                | CoreError::Migration(_)
                | CoreError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            // Keep driver details in the log, not in the response.
            let source = match &self {
                ApiError::Core(CoreError::Database(e)) => e.to_string(),
                other => other.to_string(),
            };
            tracing::error!(error = %source, "request failed");
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
