//! Request DTOs for the page cache API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::cache::Document;

/// Request body for caching a page (PUT /page)
///
/// # Fields
/// - `url`: The page URL, used as the cache key
/// - `content`: Page content as text
/// - `made_at`: Optional RFC 3339 fetch time (defaults to now)
#[derive(Debug, Clone, Deserialize)]
pub struct InsertPageRequest {
    /// The page URL
    pub url: String,
    /// The page content
    pub content: String,
    /// When the page was fetched
    #[serde(default)]
    pub made_at: Option<DateTime<Utc>>,
}

impl InsertPageRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.url.is_empty() {
            return Some("URL cannot be empty".to_string());
        }
        None
    }

    /// Converts the request into a cacheable document.
    pub fn into_document(self) -> Document {
        match self.made_at {
            Some(made_at) => Document::with_made_at(self.url, self.content, made_at),
            None => Document::new(self.url, self.content),
        }
    }
}

/// Query string naming a single page (`?url=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// The page URL
    pub url: String,
}

/// Request body for changing limits at runtime (PUT /limits)
///
/// Omitted fields keep their current value; `<= 0` means unlimited.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsRequest {
    /// New maximum number of pages
    #[serde(default)]
    pub max_pages: Option<i64>,
    /// New maximum cache size in bytes
    #[serde(default)]
    pub max_size: Option<i64>,
    /// New page timeout in seconds
    #[serde(default)]
    pub timeout: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_request_deserialize() {
        let json = r#"{"url": "gemini://a/", "content": "hello"}"#;
        let req: InsertPageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.url, "gemini://a/");
        assert_eq!(req.content, "hello");
        assert!(req.made_at.is_none());
    }

    #[test]
    fn test_insert_request_with_made_at() {
        let json = r#"{"url": "gemini://a/", "content": "x", "made_at": "2024-01-01T00:00:00Z"}"#;
        let req: InsertPageRequest = serde_json::from_str(json).unwrap();
        let doc = req.into_document();
        assert_eq!(doc.made_at().to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(doc.size(), 1);
    }

    #[test]
    fn test_validate_empty_url() {
        let req = InsertPageRequest {
            url: "".to_string(),
            content: "test".to_string(),
            made_at: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = InsertPageRequest {
            url: "gemini://a/".to_string(),
            content: "test".to_string(),
            made_at: None,
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_limits_request_partial() {
        let req: LimitsRequest = serde_json::from_str(r#"{"timeout": 10}"#).unwrap();
        assert_eq!(req.timeout, Some(10));
        assert!(req.max_pages.is_none());
        assert!(req.max_size.is_none());
    }
}
