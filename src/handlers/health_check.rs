use axum::http::StatusCode;
use tracing::{debug, instrument};

/// Liveness probe for load balancers and orchestrators.
///
/// GET /health-check
///
/// Answers `200 OK` with an empty body as long as the server accepts requests.
/// The provider store is not consulted.
#[instrument]
pub async fn health_check() -> StatusCode {
    debug!("Health check requested");
    StatusCode::OK
}
