//! Configuration Module
//!
//! Loads cache limits and server settings from a TOML file and/or
//! environment variables, and pushes the limits into a live cache.
//!
//! ```toml
//! [cache]
//! max_pages = 20   # <= 0 for unlimited
//! max_size = 0     # bytes, <= 0 for unlimited
//! timeout = 0      # seconds, <= 0 to never expire
//!
//! [server]
//! port = 3000
//! ```

use std::env;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::cache::{PageCache, DEFAULT_MAX_PAGES, DEFAULT_MAX_SIZE, DEFAULT_TIMEOUT};
use crate::error::{CacheError, Result};

/// Default HTTP port for the inspection service
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Server configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of cached pages
    pub max_pages: i64,
    /// Maximum aggregate page size in bytes
    pub max_size: i64,
    /// Seconds a page stays valid after it was fetched
    pub timeout: i64,
    /// HTTP server port
    pub server_port: u16,
}

// == File Layout ==
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    cache: CacheSection,
    server: ServerSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct CacheSection {
    max_pages: i64,
    max_size: i64,
    timeout: i64,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_size: DEFAULT_MAX_SIZE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ServerSection {
    port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_PAGES` - Maximum cached pages (default: 20)
    /// - `CACHE_MAX_SIZE` - Maximum cache size in bytes (default: 0, unlimited)
    /// - `CACHE_TIMEOUT` - Page timeout in seconds (default: 0, never)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(s)?;
        Ok(Self {
            max_pages: file.cache.max_pages,
            max_size: file.cache.max_size,
            timeout: file.cache.timeout,
            server_port: file.server.port,
        })
    }

    /// Reads the TOML file at `path`, then applies environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CacheError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_toml_str(&text)?.with_env_overrides())
    }

    /// Replaces fields with any set and parsable environment variables.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_var("CACHE_MAX_PAGES") {
            self.max_pages = v;
        }
        if let Some(v) = env_var("CACHE_MAX_SIZE") {
            self.max_size = v;
        }
        if let Some(v) = env_var("CACHE_TIMEOUT") {
            self.timeout = v;
        }
        if let Some(v) = env_var("SERVER_PORT") {
            self.server_port = v;
        }
        self
    }

    /// Pushes the cache limits into `cache`.
    ///
    /// Already-stored pages are not evicted until the next insert.
    pub fn apply(&self, cache: &PageCache) {
        cache.set_max_entries(self.max_pages);
        cache.set_max_bytes(self.max_size);
        cache.set_ttl(self.timeout);
        info!(
            "Cache limits applied: max_pages={}, max_size={}, timeout={}s",
            self.max_pages, self.max_size, self.timeout
        );
    }
}

fn env_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_size: DEFAULT_MAX_SIZE,
            timeout: DEFAULT_TIMEOUT,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}
