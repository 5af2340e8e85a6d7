//! In-Memory Cache Backend
//!
//! A [`CacheClient`] backed by a process-local map, for tests and local
//! development without a running cache service. Expiry is checked lazily on
//! read, which is enough to mirror the external service's observable behavior.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::client::CacheClient;
use crate::error::Result;

// == Memory Cache ==
/// In-process cache entry: stored text and its expiry deadline.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-process stand-in for the external cache service.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` holds an unexpired entry.
    ///
    /// Test helper; the HTTP layer only goes through [`CacheClient`].
    pub async fn contains(&self, key: &str) -> bool {
        let entries = self.entries.lock().await;
        entries
            .get(key)
            .is_some_and(|entry| entry.expires_at > Instant::now())
    }
}

#[async_trait]
impl CacheClient for MemoryCache {
    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                // Expired; drop it like the external service would have
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new();
        cache.set_ex("key", "\"value\"", 60).await.unwrap();

        let value = cache.get("key").await.unwrap();
        assert_eq!(value.as_deref(), Some("\"value\""));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite_resets_value() {
        let cache = MemoryCache::new();
        cache.set_ex("key", "\"first\"", 60).await.unwrap();
        cache.set_ex("key", "\"second\"", 60).await.unwrap();

        let value = cache.get("key").await.unwrap();
        assert_eq!(value.as_deref(), Some("\"second\""));
    }

    #[tokio::test]
    async fn test_expired_entry_is_absent() {
        let cache = MemoryCache::new();
        cache.set_ex("key", "\"value\"", 0).await.unwrap();

        // ttl of zero expires immediately
        assert_eq!(cache.get("key").await.unwrap(), None);
        assert!(!cache.contains("key").await);
    }
}
