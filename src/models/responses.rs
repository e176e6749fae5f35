//! Response DTOs for the page cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CacheStats, Document};

/// Response body for a page lookup (GET /page)
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    /// The page URL
    pub url: String,
    /// Page content, lossily decoded as UTF-8
    pub content: String,
    /// Content size in bytes
    pub size: usize,
    /// When the page was fetched
    pub made_at: DateTime<Utc>,
}

impl From<&Document> for PageResponse {
    fn from(doc: &Document) -> Self {
        Self {
            url: doc.url().to_string(),
            content: String::from_utf8_lossy(doc.content()).into_owned(),
            size: doc.size(),
            made_at: doc.made_at(),
        }
    }
}

/// Response body for caching a page (PUT /page)
#[derive(Debug, Clone, Serialize)]
pub struct InsertPageResponse {
    /// Status message
    pub message: String,
    /// The page URL
    pub url: String,
    /// Whether the page can be looked up right after the insert
    pub cached: bool,
}

impl InsertPageResponse {
    /// Creates a new InsertPageResponse
    pub fn new(url: impl Into<String>, cached: bool) -> Self {
        let url = url.into();
        let message = if cached {
            format!("Page '{}' cached", url)
        } else {
            format!("Page '{}' not cached", url)
        };
        Self {
            message,
            url,
            cached,
        }
    }
}

/// Response body for removing a page (DELETE /page)
#[derive(Debug, Clone, Serialize)]
pub struct RemovePageResponse {
    /// Status message
    pub message: String,
    /// The page URL
    pub url: String,
}

impl RemovePageResponse {
    /// Creates a new RemovePageResponse
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            message: format!("Page '{}' removed", url),
            url,
        }
    }
}

/// Response body for clearing the cache (DELETE /pages)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Status message
    pub message: String,
}

impl ClearResponse {
    pub fn new() -> Self {
        Self {
            message: "Page cache cleared".to_string(),
        }
    }
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the stats and limits endpoints
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Share of the tightest bound in use
    pub fill_ratio: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let fill_ratio = stats.fill_ratio();
        Self { stats, fill_ratio }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
