//! Cache Client Trait
//!
//! The seam between the HTTP layer and the external cache service. Handlers
//! receive a client handle through `AppState` rather than a module-global
//! connection, so tests can substitute an in-process backend.

use async_trait::async_trait;

use crate::error::Result;

// == Cache Client Trait ==
/// Minimal contract the gateway needs from a key-value cache: set with
/// server-side expiry, and get.
///
/// Each call is atomic on its own; no multi-step transaction spans a request.
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Stores `value` under `key`, expiring after `ttl_seconds`.
    ///
    /// Overwrites any existing entry for the key and resets its expiry.
    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()>;

    /// Retrieves the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key holds an unexpired entry
    /// - `Ok(None)` if the key was never stored or has expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Checks that the cache service is reachable.
    async fn ping(&self) -> Result<()>;
}
