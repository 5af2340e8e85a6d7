//! Redis Gateway - A lightweight HTTP front-end for a key-value cache
//!
//! Exposes endpoints to store a JSON value under a key with an expiration and
//! to retrieve it by key. Durability, eviction, and expiry are delegated
//! entirely to the external cache service.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{CacheClient, MemoryCache, RedisCache};
pub use config::Config;
pub use error::{GatewayError, Result};
