//! Page Cache - bounded in-memory cache for fetched pages
//!
//! Stores documents by URL under entry-count and byte-size limits, evicting
//! in insertion order, and hides pages older than a configurable timeout.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{Document, PageCache};
pub use config::Config;
