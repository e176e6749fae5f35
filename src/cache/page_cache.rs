//! Page Cache Module
//!
//! Thread-safe handle over a [`PageStore`].
//!
//! All state sits behind one reader/writer lock. Lookups and size queries
//! share the read lock; insert, remove, clear and limit changes take the
//! write lock. Eviction during an insert runs against the already-locked
//! store and never re-enters the public methods here.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::cache::{
    CacheStats, Document, PageStore, DEFAULT_MAX_PAGES, DEFAULT_MAX_SIZE, DEFAULT_TIMEOUT,
};

// == Page Cache ==
/// Shared, cloneable handle to one page cache.
///
/// Clones share the same underlying store. Create one at startup and hand
/// clones to every fetcher and reader.
#[derive(Debug, Clone)]
pub struct PageCache {
    inner: Arc<RwLock<PageStore>>,
}

impl PageCache {
    // == Constructor ==
    /// Creates a cache with the given limits (`<= 0` for unlimited / never
    /// expiring).
    pub fn new(max_entries: i64, max_bytes: i64, ttl_seconds: i64) -> Self {
        Self::from_store(PageStore::new(max_entries, max_bytes, ttl_seconds))
    }

    /// Wraps an existing store.
    pub fn from_store(store: PageStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    // == Limits ==
    /// Sets the maximum number of pages. No immediate eviction.
    pub fn set_max_entries(&self, n: i64) {
        self.inner.write().set_max_entries(n);
    }

    /// Sets the maximum aggregate size in bytes. No immediate eviction.
    pub fn set_max_bytes(&self, n: i64) {
        self.inner.write().set_max_bytes(n);
    }

    /// Sets how many seconds a page stays visible after it was fetched.
    pub fn set_ttl(&self, seconds: i64) {
        self.inner.write().set_ttl(seconds);
    }

    // == Mutations ==
    /// Adds `doc`, evicting the oldest pages as needed to stay in bounds.
    ///
    /// Pages without a URL, or larger than the whole cache, are silently
    /// dropped.
    pub fn insert(&self, doc: Document) {
        self.inner.write().insert(doc);
    }

    /// Removes `url` from the cache. Absent URLs are a no-op.
    pub fn remove(&self, url: &str) {
        self.inner.write().remove(url);
    }

    /// Removes every page.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    // == Reads ==
    /// Returns the page for `url` if cached and not stale.
    pub fn get(&self, url: &str) -> Option<Arc<Document>> {
        self.inner.read().get(url)
    }

    /// Approximate size of the cache in bytes.
    pub fn total_size(&self) -> usize {
        self.inner.read().total_size()
    }

    /// Number of cached pages, stale ones included.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Snapshot of counters and limits, taken under a single read lock.
    pub fn stats(&self) -> CacheStats {
        self.inner.read().stats()
    }

    /// Cached URLs from next eviction victim to most recently inserted.
    pub fn urls(&self) -> Vec<String> {
        self.inner.read().urls()
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> std::result::Result<(), String> {
        self.inner.read().check_invariants()
    }
}

impl Default for PageCache {
    /// 20 pages, no size limit, pages never expire.
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAGES, DEFAULT_MAX_SIZE, DEFAULT_TIMEOUT)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_cache_default_limits() {
        let stats = PageCache::default().stats();
        assert_eq!(stats.max_entries, Some(20));
        assert_eq!(stats.max_bytes, None);
        assert_eq!(stats.ttl_seconds, None);
    }

    #[test]
    fn test_clones_share_state() {
        let cache = PageCache::default();
        let other = cache.clone();

        cache.insert(Document::new("gemini://a/", "page"));

        assert_eq!(other.len(), 1);
        assert_eq!(other.get("gemini://a/").unwrap().content(), b"page");
    }

    #[test]
    fn test_independent_instances() {
        let a = PageCache::default();
        let b = PageCache::default();

        a.insert(Document::new("x", "1"));

        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_setters_apply_on_next_insert() {
        let cache = PageCache::new(0, 0, 0);
        for url in ["a", "b", "c"] {
            cache.insert(Document::new(url, "x"));
        }

        cache.set_max_entries(1);
        assert_eq!(cache.len(), 3);

        cache.insert(Document::new("d", "x"));
        assert_eq!(cache.urls(), vec!["d".to_string()]);
    }

    #[test]
    fn test_set_max_bytes() {
        let cache = PageCache::new(0, 0, 0);
        cache.set_max_bytes(4);

        cache.insert(Document::new("a", "12345"));
        assert!(cache.is_empty());

        cache.insert(Document::new("b", "1234"));
        assert_eq!(cache.total_size(), 4);
    }

    #[test]
    fn test_returned_document_survives_removal() {
        let cache = PageCache::default();
        cache.insert(Document::new("x", "body"));

        let held = cache.get("x").unwrap();
        cache.remove("x");

        assert!(cache.get("x").is_none());
        assert_eq!(held.content(), b"body");
    }

    #[test]
    fn test_clear_resets_fully() {
        let cache = PageCache::new(0, 0, 0);
        cache.insert(Document::new("a", "123"));
        cache.insert(Document::new("b", "456"));

        cache.clear();

        assert_eq!(cache.len(), 0);
        assert_eq!(cache.total_size(), 0);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn test_concurrent_readers_during_writes() {
        let cache = PageCache::new(8, 64, 0);
        let mut handles = Vec::new();

        for writer in 0..4 {
            let cache = cache.clone();
            handles.push(thread::spawn(move || {
                for i in 0..500 {
                    let url = format!("gemini://host/{}", (writer * 7 + i) % 20);
                    if i % 5 == 0 {
                        cache.remove(&url);
                    } else {
                        cache.insert(Document::new(url, vec![b'x'; i % 16]));
                    }
                }
            }));
        }

        for _ in 0..4 {
            let cache = cache.clone();
            handles.push(thread::spawn(move || {
                for i in 0..2000 {
                    let url = format!("gemini://host/{}", i % 20);
                    if let Some(doc) = cache.get(&url) {
                        assert_eq!(doc.url(), url);
                        assert_eq!(doc.size(), doc.content().len());
                    }
                    let stats = cache.stats();
                    assert!(stats.entries <= 8);
                    assert!(stats.total_bytes <= 64);
                    cache.check_invariants().unwrap();
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        cache.check_invariants().unwrap();
        assert!(cache.len() <= 8);
        assert!(cache.total_size() <= 64);
    }
}
