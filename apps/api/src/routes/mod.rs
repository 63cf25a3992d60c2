pub mod health;

use axum::{http::Uri, routing::any, Json, Router};

use crate::errors::AppError;
use health::HealthResponse;

/// Function route under the `api` prefix, as the Azure Functions host exposes it.
pub const HEALTH_ROUTE: &str = "/api/Health";

/// True when `path` is the function route or below it, ignoring ASCII case
/// and trailing slashes.
fn is_health_path(path: &str) -> bool {
    let normalized = path.to_ascii_lowercase();
    let normalized = normalized.trim_end_matches('/');
    let route = HEALTH_ROUTE.to_ascii_lowercase();
    normalized == route
        || normalized
            .strip_prefix(route.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
}

// Functions host routing is case-insensitive; axum's is not, so spellings the
// exact routes miss land here.
async fn fallback(uri: Uri) -> Result<Json<HealthResponse>, AppError> {
    if is_health_path(uri.path()) {
        Ok(health::health_handler().await)
    } else {
        Err(AppError::NotFound {
            path: uri.path().to_string(),
        })
    }
}

pub fn build_router() -> Router {
    Router::new()
        .route(HEALTH_ROUTE, any(health::health_handler))
        .route(&format!("{HEALTH_ROUTE}/*rest"), any(health::health_handler))
        .fallback(fallback)
}
