//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! It centralizes error logging and HTTP response generation, so handlers can
//! simply propagate failures with `?`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::handlers::ApiResponse;
use crate::models::UnsupportedMaterial;
use crate::services::store::StoreError;

/// Central application error type for the HTTP layer.
///
/// Client errors are logged at `warn`, server errors at `error`, both at the
/// point the response is produced.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(&'static str),

    #[error(transparent)]
    UnsupportedMaterial(#[from] UnsupportedMaterial),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::UnsupportedMaterial(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(msg) => *msg,
            AppError::UnsupportedMaterial(_) => "floor material is not supported",
            AppError::Store(_) => "db error",
            AppError::Internal => "internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_client_error() {
            warn!(status = status.as_u16(), error = %self, "{message}");
        } else {
            error!(status = status.as_u16(), error = ?self, "{message}");
        }

        (status, Json(ApiResponse::<()>::message(status, message))).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            AppError::BadRequest("binding request failed").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(UnsupportedMaterial("stone".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(StoreError::DuplicateEntry).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_errors_keep_their_kind() {
        let err = AppError::from(StoreError::InvalidReference);
        assert!(matches!(err, AppError::Store(StoreError::InvalidReference)));
        assert_eq!(err.message(), "db error");
    }
}
