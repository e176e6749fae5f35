//! Document Module
//!
//! Defines the cached unit: a fetched page keyed by its URL.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Document ==
/// A fetched page as handed to the cache.
///
/// Documents are only ever replaced as a whole. The cache hands them out
/// behind an `Arc`, so a looked-up document cannot change under the byte
/// accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Canonical URL of the page, the cache key
    url: String,
    /// Raw page content
    content: Vec<u8>,
    /// When the page was fetched (not when it was cached)
    made_at: DateTime<Utc>,
    /// Cached `content.len()`
    size: usize,
}

impl Document {
    // == Constructor ==
    /// Creates a document fetched just now.
    pub fn new(url: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self::with_made_at(url, content, Utc::now())
    }

    /// Creates a document with an explicit fetch timestamp.
    pub fn with_made_at(
        url: impl Into<String>,
        content: impl Into<Vec<u8>>,
        made_at: DateTime<Utc>,
    ) -> Self {
        let content = content.into();
        Self {
            url: url.into(),
            size: content.len(),
            content,
            made_at,
        }
    }

    // == Accessors ==
    /// The URL this document is cached under.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw page content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// When the page was fetched.
    pub fn made_at(&self) -> DateTime<Utc> {
        self.made_at
    }

    // == Size ==
    /// Size of the content in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    // == Freshness ==
    /// Returns true if the document may still be served under `ttl`.
    ///
    /// `None` means documents never go stale.
    pub fn is_fresh(&self, ttl: Option<Duration>) -> bool {
        self.is_fresh_at(ttl, Utc::now())
    }

    /// Freshness check against a caller-supplied clock reading.
    ///
    /// A document stays fresh while the time elapsed since `made_at` is
    /// strictly less than `ttl`. A fetch timestamp in the future counts as
    /// zero elapsed time.
    pub fn is_fresh_at(&self, ttl: Option<Duration>, now: DateTime<Utc>) -> bool {
        let Some(ttl) = ttl else {
            return true;
        };
        match now.signed_duration_since(self.made_at).to_std() {
            Ok(elapsed) => elapsed < ttl,
            Err(_) => true,
        }
    }
}
