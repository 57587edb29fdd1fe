#[cfg(test)]
mod tests {
    use crate::cache::{CacheEntry, CacheRepositoryTrait};
    use crate::country::{CountryResolver, CountryResolverTrait};
    use crate::errors::{Error, Result};
    use async_trait::async_trait;
    use atlasboard_country_data::{CountryDataError, CountryInfo, CountryInfoProvider};
    use chrono::{DateTime, Utc};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // --- Mock cache store ---
    #[derive(Default)]
    struct MockCacheRepository {
        entries: Mutex<HashMap<String, CacheEntry>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl CacheRepositoryTrait for MockCacheRepository {
        async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn upsert(&self, entry: CacheEntry) -> Result<()> {
            if self.fail_writes {
                return Err(Error::Cache("write rejected".to_string()));
            }
            self.entries
                .lock()
                .unwrap()
                .insert(entry.key.clone(), entry);
            Ok(())
        }

        async fn purge_older_than(&self, _cutoff: DateTime<Utc>) -> Result<usize> {
            Ok(0)
        }
    }

    // --- Mock provider with a call counter ---
    struct MockCountryProvider {
        calls: AtomicUsize,
        response: std::result::Result<CountryInfo, String>,
    }

    impl MockCountryProvider {
        fn succeeding(info: CountryInfo) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Ok(info),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Err(message.to_string()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CountryInfoProvider for MockCountryProvider {
        fn id(&self) -> &'static str {
            "MOCK_COUNTRIES"
        }

        async fn fetch_country(&self, _name_or_iso: &str) -> std::result::Result<CountryInfo, CountryDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(info) => Ok(info.clone()),
                Err(message) => Err(CountryDataError::ProviderError {
                    provider: "MOCK_COUNTRIES".to_string(),
                    message: message.clone(),
                }),
            }
        }

        async fn probe(&self) -> std::result::Result<(), CountryDataError> {
            Ok(())
        }
    }

    fn norway() -> CountryInfo {
        CountryInfo {
            name: "Norway".to_string(),
            capital: "Oslo".to_string(),
            population: 5_379_475,
            area: 323_802.0,
            base_currency: "NOK".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn second_resolve_is_served_from_cache() {
        let cache = Arc::new(MockCacheRepository::default());
        let provider = Arc::new(MockCountryProvider::succeeding(norway()));
        let resolver = CountryResolver::new(cache.clone(), provider.clone());

        let first = resolver.resolve("Norway").await.unwrap();
        let second = resolver.resolve("Norway").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.call_count(), 1);
        assert!(cache.entries.lock().unwrap().contains_key("country:NORWAY"));
    }

    #[tokio::test]
    async fn key_is_normalized_to_uppercase() {
        let cache = Arc::new(MockCacheRepository::default());
        let provider = Arc::new(MockCountryProvider::succeeding(norway()));
        let resolver = CountryResolver::new(cache.clone(), provider.clone());

        resolver.resolve("no").await.unwrap();
        resolver.resolve("NO").await.unwrap();

        // Both spellings hit the same cache slot.
        assert_eq!(provider.call_count(), 1);
        assert_eq!(cache.entries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_cache_payload_falls_through_to_provider() {
        let cache = Arc::new(MockCacheRepository::default());
        cache.entries.lock().unwrap().insert(
            "country:NO".to_string(),
            CacheEntry {
                key: "country:NO".to_string(),
                data: b"not json".to_vec(),
                last_fetched: Utc::now(),
                ttl_hours: 24,
            },
        );
        let provider = Arc::new(MockCountryProvider::succeeding(norway()));
        let resolver = CountryResolver::new(cache, provider.clone());

        let info = resolver.resolve("NO").await.unwrap();
        assert_eq!(info.capital, "Oslo");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn cache_write_failure_still_returns_fresh_result() {
        let cache = Arc::new(MockCacheRepository {
            fail_writes: true,
            ..Default::default()
        });
        let provider = Arc::new(MockCountryProvider::succeeding(norway()));
        let resolver = CountryResolver::new(cache, provider);

        let info = resolver.resolve("NO").await.unwrap();
        assert_eq!(info.name, "Norway");
    }

    #[tokio::test]
    async fn provider_failure_propagates_on_cache_miss() {
        let cache = Arc::new(MockCacheRepository::default());
        let provider = Arc::new(MockCountryProvider::failing("upstream down"));
        let resolver = CountryResolver::new(cache, provider);

        let err = resolver.resolve("NO").await.unwrap_err();
        assert!(matches!(err, Error::CountryData(_)));
    }
}
