//! # HTTP Request Handlers
//!
//! This module contains the HTTP request handlers of the provider lookup
//! service and the JSON envelope every response is wrapped in.
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Liveness probe
//! - **Providers** (`providers`) - Ranked provider lookup for a customer request

mod health_check;
mod providers;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

pub use health_check::*;
pub use providers::*;

/// Envelope wrapping every JSON response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(status: StatusCode, message: &str, data: T) -> Self {
        Self {
            code: status.as_u16(),
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn message(status: StatusCode, message: &str) -> Self {
        Self {
            code: status.as_u16(),
            message: message.to_string(),
            data: None,
        }
    }
}
