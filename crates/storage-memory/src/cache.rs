//! Cache document store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use log::debug;

use atlasboard_core::cache::{CacheEntry, CacheRepositoryTrait};
use atlasboard_core::errors::Result;

/// DashMap-backed cache store keyed by the composite cache key.
#[derive(Default)]
pub struct InMemoryCacheRepository {
    entries: DashMap<String, CacheEntry>,
}

impl InMemoryCacheRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheRepositoryTrait for InMemoryCacheRepository {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        Ok(self.entries.get(key).map(|entry| entry.clone()))
    }

    async fn upsert(&self, entry: CacheEntry) -> Result<()> {
        self.entries.insert(entry.key.clone(), entry);
        Ok(())
    }

    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.last_fetched >= cutoff);
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!("Purged {} cache entries older than {}", removed, cutoff);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(key: &str, age_hours: i64) -> CacheEntry {
        CacheEntry {
            key: key.to_string(),
            data: vec![1, 2, 3],
            last_fetched: Utc::now() - Duration::hours(age_hours),
            ttl_hours: 24,
        }
    }

    #[tokio::test]
    async fn get_returns_none_for_missing_key() {
        let repo = InMemoryCacheRepository::new();
        assert!(repo.get("country:NO").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_overwrites_existing_entry() {
        let repo = InMemoryCacheRepository::new();
        repo.upsert(entry("country:NO", 0)).await.unwrap();

        let mut fresher = entry("country:NO", 0);
        fresher.data = vec![9];
        repo.upsert(fresher).await.unwrap();

        let stored = repo.get("country:NO").await.unwrap().unwrap();
        assert_eq!(stored.data, vec![9]);
    }

    #[tokio::test]
    async fn purge_removes_only_entries_past_the_cutoff() {
        let repo = InMemoryCacheRepository::new();
        repo.upsert(entry("country:NO", 30)).await.unwrap();
        repo.upsert(entry("country:SE", 1)).await.unwrap();

        let removed = repo
            .purge_older_than(Utc::now() - Duration::hours(24))
            .await
            .unwrap();

        assert_eq!(removed, 1);
        assert!(repo.get("country:NO").await.unwrap().is_none());
        assert!(repo.get("country:SE").await.unwrap().is_some());
    }
}
