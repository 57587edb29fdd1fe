use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::cache_model::CacheEntry;
use crate::errors::Result;

/// Trait for cache store operations.
#[async_trait]
pub trait CacheRepositoryTrait: Send + Sync {
    /// Fetch an entry by key. `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>>;
    /// Create or overwrite an entry.
    async fn upsert(&self, entry: CacheEntry) -> Result<()>;
    /// Bulk-delete entries whose `last_fetched` is before `cutoff`,
    /// returning how many were removed.
    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize>;
}
