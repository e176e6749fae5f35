//! API Handlers
//!
//! HTTP request handlers for each page cache endpoint.
//!
//! Cache calls are synchronous and only do in-memory work, so handlers call
//! them directly without leaving the async task.

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use crate::cache::PageCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, HealthResponse, InsertPageRequest, InsertPageResponse, LimitsRequest,
    PageQuery, PageResponse, RemovePageResponse, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Shared page cache handle
    pub cache: PageCache,
}

impl AppState {
    /// Creates a new AppState around an existing cache handle.
    pub fn new(cache: PageCache) -> Self {
        Self { cache }
    }

    /// Creates a new AppState with limits taken from the Config.
    pub fn from_config(config: &Config) -> Self {
        let cache = PageCache::default();
        config.apply(&cache);
        Self::new(cache)
    }
}

/// Handler for PUT /page
///
/// Caches a page. Oversized pages are accepted but not stored, reported
/// through `cached: false`.
pub async fn insert_handler(
    State(state): State<AppState>,
    Json(req): Json<InsertPageRequest>,
) -> Result<Json<InsertPageResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let url = req.url.clone();
    state.cache.insert(req.into_document());
    let cached = state.cache.get(&url).is_some();
    debug!(url = %url, cached, "Page insert handled");

    Ok(Json(InsertPageResponse::new(url, cached)))
}

/// Handler for GET /page?url=
///
/// Returns the cached page, or 404 if it is missing or stale.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse>> {
    let doc = state
        .cache
        .get(&query.url)
        .ok_or(CacheError::NotFound(query.url))?;

    Ok(Json(PageResponse::from(doc.as_ref())))
}

/// Handler for DELETE /page?url=
///
/// Removing an absent page still succeeds.
pub async fn remove_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<RemovePageResponse> {
    state.cache.remove(&query.url);
    Json(RemovePageResponse::new(query.url))
}

/// Handler for DELETE /pages
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.clear();
    Json(ClearResponse::new())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for PUT /limits
///
/// Applies the given limits; they take effect from the next insert.
pub async fn limits_handler(
    State(state): State<AppState>,
    Json(req): Json<LimitsRequest>,
) -> Json<StatsResponse> {
    if let Some(n) = req.max_pages {
        state.cache.set_max_entries(n);
    }
    if let Some(n) = req.max_size {
        state.cache.set_max_bytes(n);
    }
    if let Some(seconds) = req.timeout {
        state.cache.set_ttl(seconds);
    }
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
