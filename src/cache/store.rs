//! Page Store Module
//!
//! The unlocked cache engine: URL-keyed document table, insertion-order
//! record, count/byte limits and TTL visibility.
//!
//! Every `&mut self` method here is the internal mutation path. Callers must
//! already hold exclusive access; [`PageCache`](crate::cache::PageCache) is
//! the lock-acquiring wrapper.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::cache::order::{InsertionOrder, NodeId};
use crate::cache::{CacheStats, Document};

/// Maps the `<= 0 means unlimited` convention onto an optional bound.
pub(crate) fn limit_from(n: i64) -> Option<usize> {
    if n <= 0 {
        None
    } else {
        usize::try_from(n).ok()
    }
}

/// Maps a TTL in seconds onto an optional window; `<= 0` never expires.
pub(crate) fn ttl_from(seconds: i64) -> Option<Duration> {
    u64::try_from(seconds)
        .ok()
        .filter(|&s| s > 0)
        .map(Duration::from_secs)
}

// == Slot ==
#[derive(Debug)]
struct Slot {
    doc: Arc<Document>,
    /// Position of this URL in the insertion order
    node: NodeId,
}

// == Page Store ==
/// Bounded document store with FIFO eviction.
#[derive(Debug)]
pub struct PageStore {
    /// URL -> document table
    entries: HashMap<String, Slot>,
    /// Oldest-first record of (re-)insertions
    order: InsertionOrder,
    /// Running sum of stored document sizes
    total_bytes: usize,
    max_entries: Option<usize>,
    max_bytes: Option<usize>,
    ttl: Option<Duration>,
}

impl PageStore {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of documents, `<= 0` for no limit
    /// * `max_bytes` - Maximum aggregate content size, `<= 0` for no limit
    /// * `ttl_seconds` - Staleness window in seconds, `<= 0` to never expire
    pub fn new(max_entries: i64, max_bytes: i64, ttl_seconds: i64) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            total_bytes: 0,
            max_entries: limit_from(max_entries),
            max_bytes: limit_from(max_bytes),
            ttl: ttl_from(ttl_seconds),
        }
    }

    // == Limits ==
    /// Changes the entry limit. Takes effect on the next insert.
    pub fn set_max_entries(&mut self, n: i64) {
        self.max_entries = limit_from(n);
        info!(max_entries = ?self.max_entries, "Page cache entry limit changed");
    }

    /// Changes the byte limit. Takes effect on the next insert.
    pub fn set_max_bytes(&mut self, n: i64) {
        self.max_bytes = limit_from(n);
        info!(max_bytes = ?self.max_bytes, "Page cache size limit changed");
    }

    /// Changes the staleness window. Applies to every subsequent lookup.
    pub fn set_ttl(&mut self, seconds: i64) {
        self.ttl = ttl_from(seconds);
        info!(ttl = ?self.ttl, "Page cache timeout changed");
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    pub fn max_bytes(&self) -> Option<usize> {
        self.max_bytes
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    // == Insert ==
    /// Stores `doc` under its URL, evicting the oldest entries as needed.
    ///
    /// Silently ignores documents with an empty URL and documents larger
    /// than the byte limit. Both bounds are enforced before the write, so a
    /// re-insert under a full cache may evict an entry even though the
    /// replacement itself frees a slot.
    pub fn insert(&mut self, doc: Document) {
        if doc.url().is_empty() {
            debug!("Not caching document without URL");
            return;
        }

        let size = doc.size();
        if matches!(self.max_bytes, Some(max) if size > max) {
            debug!(url = doc.url(), size, "Document larger than cache, not caching");
            return;
        }

        if let Some(max) = self.max_entries {
            while self.entries.len() >= max {
                if !self.evict_oldest() {
                    break;
                }
            }
        }
        if let Some(max) = self.max_bytes {
            while self.total_bytes + size > max {
                if !self.evict_oldest() {
                    break;
                }
            }
        }

        if let Some(old) = self.entries.remove(doc.url()) {
            self.order.remove(old.node);
            self.total_bytes -= old.doc.size();
        }

        let url = doc.url().to_string();
        let node = self.order.push_back(url.clone());
        self.total_bytes += size;
        self.entries.insert(
            url,
            Slot {
                doc: Arc::new(doc),
                node,
            },
        );
    }

    /// Evicts the head of the insertion order. Returns false if empty.
    fn evict_oldest(&mut self) -> bool {
        let Some((_, url)) = self.order.front() else {
            return false;
        };
        let url = url.to_string();
        debug!(url = %url, "Evicting page from cache");
        self.remove(&url);
        true
    }

    // == Remove ==
    /// Removes `url` if present, returning the removed document.
    pub fn remove(&mut self, url: &str) -> Option<Arc<Document>> {
        let slot = self.entries.remove(url)?;
        self.order.remove(slot.node);
        self.total_bytes -= slot.doc.size();
        Some(slot.doc)
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.total_bytes = 0;
        info!(dropped, "Page cache cleared");
    }

    // == Get ==
    /// Returns the document for `url` if present and not stale.
    ///
    /// Stale documents are hidden but stay stored, still counting against
    /// both limits, until overwritten or evicted.
    pub fn get(&self, url: &str) -> Option<Arc<Document>> {
        self.entries
            .get(url)
            .filter(|slot| slot.doc.is_fresh(self.ttl))
            .map(|slot| Arc::clone(&slot.doc))
    }

    // == Sizes ==
    /// Sum of all stored document sizes in bytes.
    pub fn total_size(&self) -> usize {
        self.total_bytes
    }

    /// Number of stored documents, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored URLs from oldest to newest insertion.
    pub fn urls(&self) -> Vec<String> {
        self.order.iter().map(str::to_string).collect()
    }

    // == Stats ==
    /// Returns a snapshot of the counters and limits.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            total_bytes: self.total_bytes,
            max_entries: self.max_entries,
            max_bytes: self.max_bytes,
            ttl_seconds: self.ttl.map(|ttl| ttl.as_secs()),
        }
    }

    /// Verifies that the table, the order record and the byte counter agree.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.order.len() != self.entries.len() {
            return Err(format!(
                "order has {} urls, table has {} entries",
                self.order.len(),
                self.entries.len()
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for url in self.order.iter() {
            if !seen.insert(url) {
                return Err(format!("duplicate url in order: {url}"));
            }
            let Some(slot) = self.entries.get(url) else {
                return Err(format!("orphan url in order: {url}"));
            };
            if self.order.get(slot.node) != Some(url) {
                return Err(format!("slot for {url} points at the wrong node"));
            }
        }
        let bytes: usize = self.entries.values().map(|slot| slot.doc.size()).sum();
        if bytes != self.total_bytes {
            return Err(format!(
                "byte counter {} disagrees with stored total {}",
                self.total_bytes, bytes
            ));
        }
        Ok(())
    }
}
