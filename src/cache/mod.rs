//! Cache Module
//!
//! Bounded in-memory page cache with FIFO eviction, byte-size limits and TTL
//! staleness.

mod document;
mod order;
mod page_cache;
mod stats;
mod store;


// Re-export public types
pub use document::Document;
pub use order::{InsertionOrder, NodeId};
pub use page_cache::PageCache;
pub use stats::CacheStats;
pub use store::PageStore;

// == Default Limits ==
/// Default maximum number of cached pages
pub const DEFAULT_MAX_PAGES: i64 = 20;

/// Default maximum cache size in bytes (unlimited)
pub const DEFAULT_MAX_SIZE: i64 = 0;

/// Default page timeout in seconds (never expires)
pub const DEFAULT_TIMEOUT: i64 = 0;
