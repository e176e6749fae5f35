//! Cache Statistics Module
//!
//! Point-in-time snapshot of the cache's size counters and configured limits.

use serde::Serialize;

// == Cache Stats ==
/// Size and count counters plus the limits in force when taken.
///
/// Limits are reported as `None` when unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of stored documents, stale ones included
    pub entries: usize,
    /// Sum of stored document sizes in bytes
    pub total_bytes: usize,
    /// Maximum number of documents
    pub max_entries: Option<usize>,
    /// Maximum aggregate size in bytes
    pub max_bytes: Option<usize>,
    /// Staleness window in seconds
    pub ttl_seconds: Option<u64>,
}

impl CacheStats {
    // == Fill Ratio ==
    /// Fraction of the tightest configured bound currently in use.
    ///
    /// Returns 0.0 when the cache is unbounded.
    pub fn fill_ratio(&self) -> f64 {
        let by_count = self
            .max_entries
            .map(|max| self.entries as f64 / max as f64);
        let by_bytes = self
            .max_bytes
            .map(|max| self.total_bytes as f64 / max as f64);

        match (by_count, by_bytes) {
            (Some(a), Some(b)) => a.max(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => 0.0,
        }
    }
}
