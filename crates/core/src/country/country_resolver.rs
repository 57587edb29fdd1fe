//! Cache-aside resolver for country identity data.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};

use atlasboard_country_data::{CountryInfo, CountryInfoProvider};

use crate::cache::{CacheEntry, CacheRepositoryTrait};
use crate::constants::{COUNTRY_CACHE_PREFIX, COUNTRY_CACHE_TTL_HOURS};
use crate::errors::Result;

/// Trait for country resolution, so the assembler can take a test double.
#[async_trait]
pub trait CountryResolverTrait: Send + Sync {
    async fn resolve(&self, name_or_iso: &str) -> Result<CountryInfo>;
}

/// Resolves country identity with a cache-aside strategy: check the cache
/// store, on miss (or corrupt payload) call the provider, then write the
/// fresh result back.
pub struct CountryResolver {
    cache: Arc<dyn CacheRepositoryTrait>,
    provider: Arc<dyn CountryInfoProvider>,
}

impl CountryResolver {
    pub fn new(cache: Arc<dyn CacheRepositoryTrait>, provider: Arc<dyn CountryInfoProvider>) -> Self {
        Self { cache, provider }
    }

    fn cache_key(name_or_iso: &str) -> String {
        format!("{}{}", COUNTRY_CACHE_PREFIX, name_or_iso.to_uppercase())
    }
}

#[async_trait]
impl CountryResolverTrait for CountryResolver {
    async fn resolve(&self, name_or_iso: &str) -> Result<CountryInfo> {
        let cache_key = Self::cache_key(name_or_iso);

        // Cache read failures count as misses. A hit requires the payload to
        // deserialize; no freshness check happens here, the recorded TTL is
        // informational only.
        match self.cache.get(&cache_key).await {
            Ok(Some(entry)) => match serde_json::from_slice::<CountryInfo>(&entry.data) {
                Ok(info) => {
                    debug!("Cache hit for {}", cache_key);
                    return Ok(info);
                }
                Err(e) => {
                    debug!("Corrupt cache payload for {}: {}", cache_key, e);
                }
            },
            Ok(None) => {}
            Err(e) => {
                warn!("Cache lookup failed for {}: {}", cache_key, e);
            }
        }

        // Miss: do the real call. Provider failure propagates, no fallback.
        let info = self.provider.fetch_country(name_or_iso).await?;

        // Write-back failure must not fail the resolution.
        match serde_json::to_vec(&info) {
            Ok(data) => {
                let entry = CacheEntry {
                    key: cache_key.clone(),
                    data,
                    last_fetched: Utc::now(),
                    ttl_hours: COUNTRY_CACHE_TTL_HOURS,
                };
                if let Err(e) = self.cache.upsert(entry).await {
                    warn!("Failed to cache country info for {}: {}", cache_key, e);
                }
            }
            Err(e) => {
                warn!("Failed to serialize country info for {}: {}", cache_key, e);
            }
        }

        Ok(info)
    }
}
