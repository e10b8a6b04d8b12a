//! # Provider Lookup Handler
//!
//! Takes a customer's request (material and location), asks the matching
//! engine for eligible providers and returns them best rated first.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use super::ApiResponse;
use crate::error::{AppError, AppResult};
use crate::models::{Address, AppState, FloorMaterial, Provider};

/// Request payload describing the customer's job.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CustomerRequest {
    /// One of `wood`, `carpet` or `tile`.
    pub material: String,
    #[validate(nested)]
    pub address: Address,
    /// Floor area to cover. Must be positive.
    #[validate(range(exclusive_min = 0.0))]
    pub area: f64,
    #[validate(length(min = 1))]
    pub phone_number: String,
}

/// A matched provider as presented to the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub name: String,
    /// Supported materials, in wood, carpet, tile order.
    pub experience: Vec<FloorMaterial>,
    pub address: Address,
    pub operating_radius: f64,
    pub rating: f64,
}

impl From<Provider> for ProviderResponse {
    fn from(provider: Provider) -> Self {
        Self {
            experience: provider.materials(),
            name: provider.name,
            address: provider.address,
            operating_radius: provider.radius,
            rating: provider.rating,
        }
    }
}

/// Lists providers able to serve the customer's request.
///
/// GET /get_providers CustomerRequest
///
/// Providers must support the requested material and be strictly within
/// their operating radius of the customer's address. The list is ordered by
/// rating, highest first.
///
/// # Returns
///
/// - `200 OK` - List of providers, possibly empty
/// - `400 Bad Request` - Malformed body, invalid field, or unsupported material
/// - `500 Internal Server Error` - Provider store failure
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn get_providers(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Vec<ProviderResponse>>>> {
    debug!("Processing provider lookup request");

    // 1. Bind and validate
    let Json(payload) = payload.map_err(|rejection| {
        warn!(%rejection, "Failed to bind request body");
        AppError::BadRequest("binding request failed")
    })?;

    if let Err(e) = payload.validate() {
        warn!(error = %e, "Invalid provider lookup request");
        return Err(AppError::BadRequest("binding request failed"));
    }

    let material: FloorMaterial = payload.material.parse()?;

    // 2. Match
    let providers = state
        .matching
        .find_providers(material, payload.address)
        .await?;

    info!(%material, count = providers.len(), "Providers matched");

    // 3. Present
    let data = providers.into_iter().map(ProviderResponse::from).collect();
    Ok(Json(ApiResponse::success(
        StatusCode::OK,
        "list of providers",
        data,
    )))
}
