//! Application error types.
//!
//! All handler failures flow through [`AppError`], which converts into an
//! HTTP response carrying the standard error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ApiResponse;

/// Result alias used across services.
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to establish a database connection.
    #[error("Database connection error: {0}")]
    DatabaseConnection(String),

    /// A query failed or returned an unusable result.
    #[error("Database query error: {0}")]
    DatabaseQuery(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseConnection(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DatabaseQuery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code for the response body.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::DatabaseConnection(_) => "DATABASE_CONNECTION_ERROR",
            AppError::DatabaseQuery(_) => "DATABASE_QUERY_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(code = self.error_code(), error = %self, "request failed");

        let body = ApiResponse::err(self.error_code(), self.to_string());
        (status, Json(body)).into_response()
    }
}
