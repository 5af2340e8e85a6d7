//! Redis Cache Adapter
//!
//! Implements [`CacheClient`] over a single multiplexed connection to a Redis
//! (or Redis-compatible) service. Expiry is enforced server-side via `SET EX`.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};

use super::client::CacheClient;
use crate::error::Result;

// == Redis Cache ==
/// Cache client backed by `redis::aio::ConnectionManager`.
///
/// The manager multiplexes all requests over one connection and transparently
/// reconnects with backoff after a connection loss. While the connection is
/// down, individual operations fail and surface as `GatewayError::Cache`.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    // == Constructor ==
    /// Connects to the cache service at `url`.
    ///
    /// Fails fast if the initial connection cannot be established; after a
    /// successful start, reconnection is handled by the manager.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_connection_manager().await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheClient for RedisCache {
    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        // ConnectionManager is a cheap handle clone, not a new connection
        let mut conn = self.conn.clone();
        let _: () = conn.set_ex(key, value, ttl_seconds).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
