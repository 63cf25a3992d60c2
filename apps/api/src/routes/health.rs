use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Liveness payload. Built fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ts: String,
}

/// Formats `now` as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn health_response_at(now: DateTime<Utc>) -> HealthResponse {
    HealthResponse {
        status: "ok",
        ts: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// ANY /api/Health
/// Method, path, headers and body are all ignored; the answer is always 200.
pub async fn health_handler() -> Json<HealthResponse> {
    let response = health_response_at(Utc::now());
    tracing::debug!(event = "health_check", ts = %response.ts, "Health check requested");
    Json(response)
}
