//! # Access Log Middleware
//!
//! Emits one event per request on the `access` tracing target, separate from
//! the application's own diagnostics so the two can be filtered independently.

use std::any::Any;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::AppError;

/// Logs method, path, status and latency of every request.
///
/// # Usage
///
/// ```rust,ignore
/// Router::new()
///     .route("/get_providers", get(get_providers))
///     .layer(middleware::from_fn(access_log_middleware))
/// ```
pub async fn access_log_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        target: "access",
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );
    response
}

/// Turns a handler panic into the regular `500` error envelope.
pub fn recover_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(%detail, "Handler panicked");
    AppError::Internal.into_response()
}
