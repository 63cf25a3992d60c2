use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::routes::HEALTH_ROUTE;

/// Request-level errors. The health function never produces one; only paths
/// outside its route do.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No route for {path}; the health function is served at {}", HEALTH_ROUTE)]
    NotFound { path: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(event = "route_not_found", error = %self, "Request outside function route");

        let mut error = json!({
            "code": self.code(),
            "message": self.to_string(),
        });
        if let AppError::NotFound { path } = &self {
            error["path"] = json!(path);
        }

        (self.status(), Json(json!({ "error": error }))).into_response()
    }
}
