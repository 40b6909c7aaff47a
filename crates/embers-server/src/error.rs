//! API error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use embers_core::AppError;
use serde::Serialize;
use thiserror::Error;

/// Errors returned to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Resource not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Malformed or invalid request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected internal failure (500).
    #[error("{0}")]
    Internal(String),

    /// The upstream API could not be reached (502).
    #[error("{0}")]
    BadGateway(String),
}

/// Wire shape of every error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };
        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            AppError::UpstreamUnavailable(_)
            | AppError::ClientError(_)
            | AppError::NetworkError(_)
            | AppError::Timeout(_) => ApiError::BadGateway(err.user_message()),
            AppError::DatabaseError(_)
            | AppError::SerializationError(_)
            | AppError::InvalidBaseUrl(_)
            | AppError::Generic(_) => ApiError::Internal(err.user_message()),
        }
    }
}

// ===== Tests =====
