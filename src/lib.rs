//! # Floormatch - Flooring Provider Lookup Service
//!
//! Matches a customer's request (floor material and location) against the
//! registered flooring service providers and returns those that can take the
//! job, best rated first.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers and the response envelope
//! - [`middleware`] - Access logging and panic recovery
//! - [`models`] - Providers, addresses and materials
//! - [`services`] - Distance function, matching engine and provider store
//! - [`config`] - Environment configuration
//! - [`logging`] - Tracing subscriber setup
//! - [`utils`] - Constants and secret loading

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, http::StatusCode, middleware::from_fn, routing::get};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    timeout::{RequestBodyTimeoutLayer, TimeoutLayer},
};

use crate::config::ServerConfig;
use crate::handlers::{get_providers, health_check};
use crate::middleware::{access_log_middleware, recover_panic};
use crate::models::AppState;
use crate::services::matching::MatchingService;
use crate::services::store::ProviderStore;

/// Creates an Axum router with default server settings.
///
/// This is a convenience function that calls [`app_with_config`] with
/// [`ServerConfig::default`].
#[inline]
pub fn app(store: Arc<dyn ProviderStore>) -> Router {
    app_with_config(store, &ServerConfig::default())
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `store` - Provider store the matching engine reads from
/// * `server` - Timeouts applied to every request
///
/// # Routes
///
/// - `GET|POST /get_providers` - Ranked provider lookup
/// - `GET /health-check` - Liveness probe
pub fn app_with_config(store: Arc<dyn ProviderStore>, server: &ServerConfig) -> Router {
    let state = Arc::new(AppState::new(MatchingService::new(store)));

    Router::new()
        .route("/health-check", get(health_check))
        .route("/get_providers", get(get_providers).post(get_providers))
        .layer(CatchPanicLayer::custom(recover_panic))
        .layer(from_fn(access_log_middleware))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server.write_timeout,
        ))
        .layer(RequestBodyTimeoutLayer::new(server.read_timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
