//! API Module
//!
//! HTTP handlers and routing for inspecting and driving a page cache.
//!
//! # Endpoints
//! - `PUT /page` - Cache a page
//! - `GET /page?url=` - Look up a page
//! - `DELETE /page?url=` - Remove a page
//! - `DELETE /pages` - Clear the cache
//! - `GET /stats` - Cache counters and limits
//! - `PUT /limits` - Change limits at runtime
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
