//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

/// Response body for the retrieve operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value, decoded back to its original JSON structure
    pub value: Value,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the store operation (POST /set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message including key and TTL
    pub message: String,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>, ttl_seconds: u64) -> Self {
        Self {
            message: format!("Stored key '{}' with TTL {}s", key.into(), ttl_seconds),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status of the gateway process
    pub status: String,
    /// Reachability of the external cache service
    pub cache: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn new(cache_status: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            cache: cache_status.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
