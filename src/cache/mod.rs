//! Cache Module
//!
//! Client-side adapters for the external key-value cache service. All
//! durability, eviction, and expiry live in the cache service itself; this
//! module only knows how to issue `SET ... EX` and `GET` against it.

mod client;
mod memory;
mod redis;

// Re-export public types
pub use self::client::CacheClient;
pub use self::memory::MemoryCache;
pub use self::redis::RedisCache;
