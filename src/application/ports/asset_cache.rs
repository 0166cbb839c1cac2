use std::str::FromStr;

use async_trait::async_trait;

/// Per-origin fetch strategy applied by the client-side offline asset cache.
///
/// The cache itself lives outside this service; the gateway only declares the
/// contract it participates in. The transcribe endpoint is registered as a
/// `NetworkFirst` origin, so the gateway must tolerate a stale cached
/// envelope being replayed to the client while it is offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStrategy {
    /// Serve from cache immediately, refresh the entry in the background.
    CacheFirst,
    /// Try the network, fall back to the cached copy on failure.
    NetworkFirst,
    /// Never hit the network; serve a placeholder when the cache misses.
    CacheOnly,
}

impl FromStr for CacheStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cache-first" => Ok(CacheStrategy::CacheFirst),
            "network-first" => Ok(CacheStrategy::NetworkFirst),
            "cache-only" => Ok(CacheStrategy::CacheOnly),
            _ => Err(format!("Invalid cache strategy: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CachedAsset {
    pub body: Vec<u8>,
    pub content_type: String,
    pub stale: bool,
}

/// Interface of the offline asset cache collaborator. Not implemented here.
#[async_trait]
pub trait AssetCache: Send + Sync {
    fn strategy_for(&self, origin: &str, path: &str) -> CacheStrategy;

    async fn fetch(&self, origin: &str, path: &str) -> Option<CachedAsset>;
}
