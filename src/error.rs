//! Error types for the cache gateway
//!
//! Provides unified error handling using thiserror. Every failure is caught
//! at the endpoint boundary and converted to an HTTP response here; cache
//! internals are logged server-side and never leak into response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

// == Gateway Error Enum ==
/// Unified error type for the cache gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Key not found in the cache (expired or never stored)
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Failure communicating with the external cache service
    #[error("Cache operation failed: {0}")]
    Cache(String),

    /// Stored text could not be decoded back to a JSON value
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<redis::RedisError> for GatewayError {
    fn from(err: redis::RedisError) -> Self {
        GatewayError::Cache(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GatewayError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            GatewayError::NotFound(key) => {
                debug!(%key, "key not found");
                // Key name stays out of the body; clients already know it.
                (StatusCode::NOT_FOUND, "Key not found".to_string())
            }
            GatewayError::Cache(detail) => {
                error!(%detail, "cache operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Cache operation failed".to_string(),
                )
            }
            GatewayError::Serialization(err) => {
                error!(error = %err, "stored value could not be decoded");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Cache operation failed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;
