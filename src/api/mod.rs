//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `GET /` - Plain-text greeting
//! - `POST /set` - Store a JSON value under a key with expiry
//! - `GET /get/:key` - Retrieve a value by key
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
