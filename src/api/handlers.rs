//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Handlers map requests to
//! cache operations and translate results into HTTP responses; every failure
//! is converted at this boundary, none propagate uncaught.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::warn;

use crate::cache::CacheClient;
use crate::error::{GatewayError, Result};
use crate::models::{GetResponse, HealthResponse, SetRequest, SetResponse};

/// Application state shared across all handlers.
///
/// Holds the cache client handle; the gateway itself is stateless between
/// requests. The handle is injected here rather than read from a global so
/// tests can substitute an in-process backend.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache client, one connection for the whole process
    pub cache: Arc<dyn CacheClient>,
    /// TTL in seconds applied when a store request omits `ttl`
    pub default_ttl: u64,
}

impl AppState {
    /// Creates a new AppState with the given cache client and default TTL.
    pub fn new(cache: Arc<dyn CacheClient>, default_ttl: u64) -> Self {
        Self { cache, default_ttl }
    }
}

/// Handler for GET /
///
/// Plain-text greeting so the root URL confirms the gateway is up.
pub async fn root_handler() -> &'static str {
    "Hello from the Redis cache gateway"
}

/// Handler for POST /set
///
/// Stores a JSON value under a key with server-side expiry.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    // Validate request; nothing reaches the cache on failure
    if let Some(error_msg) = req.validate() {
        return Err(GatewayError::Validation(error_msg));
    }

    let ttl = req.ttl.unwrap_or(state.default_ttl);
    // validate() guarantees a non-null value is present
    let value = req.value.unwrap_or_default();

    let encoded = serde_json::to_string(&value)?;
    state.cache.set_ex(&req.key, &encoded, ttl).await?;

    Ok(Json(SetResponse::new(req.key, ttl)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key and decodes it back to its
/// original JSON structure. An absent key (expired or never stored) is a 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let raw = state
        .cache
        .get(&key)
        .await?
        .ok_or_else(|| GatewayError::NotFound(key.clone()))?;

    let value = serde_json::from_str(&raw)?;
    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /health
///
/// Reports process health and cache reachability. Never fails the request;
/// an unreachable cache is reported in the body, not as an error status.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache_status = match state.cache.ping().await {
        Ok(()) => "connected",
        Err(err) => {
            warn!(error = %err, "cache unreachable during health check");
            "unavailable"
        }
    };

    Json(HealthResponse::new(cache_status))
}
