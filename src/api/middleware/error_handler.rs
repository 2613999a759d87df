//! Error handler for converting AppError to HTTP responses.
//!
//! Every error body has the shape `{ "message": ... }`. Store and internal
//! failures are logged here with their source chain and answered with a
//! sanitized message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::MessageResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND, `"{entity} not found"`
    /// - Validation → 400 BAD_REQUEST
    /// - Database → 500 INTERNAL_SERVER_ERROR
    /// - Unavailable → 503 SERVICE_UNAVAILABLE
    /// - Configuration → 500 INTERNAL_SERVER_ERROR
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound { entity, .. } => {
                (StatusCode::NOT_FOUND, MessageResponse::not_found(entity))
            }
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                MessageResponse::new(format!("Validation failed for {}: {}", field, reason)),
            ),
            AppError::Database { operation, source } => {
                tracing::error!(operation = %operation, error = ?source, "Database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageResponse::new(format!("Database operation failed: {}", operation)),
                )
            }
            AppError::Unavailable { operation, source } => {
                tracing::error!(operation = %operation, error = ?source, "Database unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    MessageResponse::new("Database connection unavailable"),
                )
            }
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = ?source, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageResponse::new(format!("Configuration error: {}", key)),
                )
            }
            AppError::Internal { source } => {
                tracing::error!(error = ?source, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageResponse::new("An internal error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
