#[cfg(test)]
mod tests {
    use crate::country::CountryResolverTrait;
    use crate::dashboards::{DashboardService, DashboardServiceTrait};
    use crate::errors::{Error, Result};
    use crate::registrations::{Features, Registration, RegistrationRepositoryTrait};
    use async_trait::async_trait;
    use atlasboard_country_data::{
        Coordinates, CountryDataError, CountryInfo, CurrencyRates, CurrencyRatesProvider,
        MeteoData, WeatherProvider,
    };
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // --- Mock registration repository holding a single record ---
    struct SingleRegistrationRepository {
        registration: Registration,
    }

    #[async_trait]
    impl RegistrationRepositoryTrait for SingleRegistrationRepository {
        async fn insert(&self, _registration: Registration) -> Result<Registration> {
            unimplemented!()
        }

        async fn get_by_id(&self, id: &str) -> Result<Registration> {
            if id == self.registration.id {
                Ok(self.registration.clone())
            } else {
                Err(Error::NotFound(format!("registration {} not found", id)))
            }
        }

        async fn list(&self) -> Result<Vec<Registration>> {
            Ok(vec![self.registration.clone()])
        }

        async fn update(&self, _registration: Registration) -> Result<Registration> {
            unimplemented!()
        }

        async fn delete(&self, _id: &str) -> Result<()> {
            unimplemented!()
        }
    }

    // --- Mock resolver ---
    struct MockResolver {
        calls: AtomicUsize,
        response: Option<CountryInfo>,
    }

    impl MockResolver {
        fn with(info: CountryInfo) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Some(info),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: None,
            }
        }
    }

    #[async_trait]
    impl CountryResolverTrait for MockResolver {
        async fn resolve(&self, name_or_iso: &str) -> Result<CountryInfo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response
                .clone()
                .ok_or_else(|| Error::CountryData(CountryDataError::CountryNotFound(name_or_iso.to_string())))
        }
    }

    // --- Mock weather provider ---
    struct MockWeather {
        calls: AtomicUsize,
        response: Option<MeteoData>,
    }

    impl MockWeather {
        fn with(data: MeteoData) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Some(data),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: None,
            }
        }
    }

    #[async_trait]
    impl WeatherProvider for MockWeather {
        fn id(&self) -> &'static str {
            "MOCK_WEATHER"
        }

        async fn fetch_averages(
            &self,
            _lat: f64,
            _lon: f64,
        ) -> std::result::Result<MeteoData, CountryDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.ok_or(CountryDataError::ProviderError {
                provider: "MOCK_WEATHER".to_string(),
                message: "unavailable".to_string(),
            })
        }

        async fn probe(&self) -> std::result::Result<(), CountryDataError> {
            Ok(())
        }
    }

    // --- Mock currency provider ---
    struct MockCurrency {
        calls: AtomicUsize,
        response: Option<CurrencyRates>,
    }

    impl MockCurrency {
        fn with(rates: CurrencyRates) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: Some(rates),
            }
        }
    }

    #[async_trait]
    impl CurrencyRatesProvider for MockCurrency {
        fn id(&self) -> &'static str {
            "MOCK_CURRENCY"
        }

        async fn fetch_rates(
            &self,
            _base: &str,
        ) -> std::result::Result<CurrencyRates, CountryDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone().ok_or(CountryDataError::ProviderError {
                provider: "MOCK_CURRENCY".to_string(),
                message: "unavailable".to_string(),
            })
        }

        async fn probe(&self) -> std::result::Result<(), CountryDataError> {
            Ok(())
        }
    }

    fn registration(features: Features) -> Registration {
        Registration {
            id: "reg-1".to_string(),
            country: "Norway".to_string(),
            iso_code: "NO".to_string(),
            features,
            last_change: Utc::now(),
        }
    }

    fn norway() -> CountryInfo {
        CountryInfo {
            name: "Norway".to_string(),
            capital: "Oslo".to_string(),
            population: 5_379_475,
            area: 323_802.0,
            base_currency: "NOK".to_string(),
            coordinates: Coordinates {
                latitude: 62.0,
                longitude: 10.0,
            },
        }
    }

    struct Fixture {
        service: DashboardService,
        resolver: Arc<MockResolver>,
        weather: Arc<MockWeather>,
        currency: Arc<MockCurrency>,
    }

    fn fixture(
        features: Features,
        resolver: MockResolver,
        weather: MockWeather,
        currency: MockCurrency,
    ) -> Fixture {
        let resolver = Arc::new(resolver);
        let weather = Arc::new(weather);
        let currency = Arc::new(currency);
        let service = DashboardService::new(
            Arc::new(SingleRegistrationRepository {
                registration: registration(features),
            }),
            resolver.clone(),
            weather.clone(),
            currency.clone(),
        );
        Fixture {
            service,
            resolver,
            weather,
            currency,
        }
    }

    #[tokio::test]
    async fn empty_features_issue_zero_provider_calls() {
        let f = fixture(
            Features::default(),
            MockResolver::with(norway()),
            MockWeather::with(MeteoData::default()),
            MockCurrency::with(CurrencyRates::new()),
        );

        let dash = f.service.build_dashboard("reg-1").await.unwrap();

        assert_eq!(f.resolver.calls.load(Ordering::SeqCst), 0);
        assert_eq!(f.weather.calls.load(Ordering::SeqCst), 0);
        assert_eq!(f.currency.calls.load(Ordering::SeqCst), 0);
        assert_eq!(dash.features, Default::default());
        assert_eq!(dash.country, "Norway");
        assert_eq!(dash.iso_code, "NO");
    }

    #[tokio::test]
    async fn missing_registration_is_the_only_fatal_error() {
        let f = fixture(
            Features::default(),
            MockResolver::with(norway()),
            MockWeather::with(MeteoData::default()),
            MockCurrency::with(CurrencyRates::new()),
        );

        let err = f.service.build_dashboard("missing").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn resolver_failure_degrades_to_partial_result() {
        let f = fixture(
            Features {
                capital: true,
                ..Default::default()
            },
            MockResolver::failing(),
            MockWeather::with(MeteoData::default()),
            MockCurrency::with(CurrencyRates::new()),
        );

        let dash = f.service.build_dashboard("reg-1").await.unwrap();

        assert!(dash.features.capital.is_none());
        // Nothing downstream of country info may be attempted.
        assert_eq!(f.weather.calls.load(Ordering::SeqCst), 0);
        assert_eq!(f.currency.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn weather_failure_omits_only_weather_fields() {
        let f = fixture(
            Features {
                temperature: true,
                precipitation: true,
                capital: true,
                ..Default::default()
            },
            MockResolver::with(norway()),
            MockWeather::failing(),
            MockCurrency::with(CurrencyRates::new()),
        );

        let dash = f.service.build_dashboard("reg-1").await.unwrap();

        assert_eq!(dash.features.capital.as_deref(), Some("Oslo"));
        assert!(dash.features.temperature.is_none());
        assert!(dash.features.precipitation.is_none());
    }

    #[tokio::test]
    async fn requested_currencies_are_intersected_with_provider_rates() {
        let rates = CurrencyRates::from([
            ("EUR".to_string(), 0.085),
            ("USD".to_string(), 0.093),
            ("SEK".to_string(), 0.98),
        ]);
        let f = fixture(
            Features {
                capital: true,
                target_currencies: vec![
                    "EUR".to_string(),
                    "XXX".to_string(), // unknown to the provider, silently dropped
                ],
                ..Default::default()
            },
            MockResolver::with(norway()),
            MockWeather::with(MeteoData::default()),
            MockCurrency::with(rates),
        );

        let dash = f.service.build_dashboard("reg-1").await.unwrap();

        let currencies = dash.features.target_currencies.unwrap();
        assert_eq!(currencies, HashMap::from([("EUR".to_string(), 0.085)]));
    }

    #[tokio::test]
    async fn empty_base_currency_skips_the_currency_provider() {
        let mut info = norway();
        info.base_currency = String::new();
        let f = fixture(
            Features {
                capital: true,
                target_currencies: vec!["EUR".to_string()],
                ..Default::default()
            },
            MockResolver::with(info),
            MockWeather::with(MeteoData::default()),
            MockCurrency::with(CurrencyRates::new()),
        );

        let dash = f.service.build_dashboard("reg-1").await.unwrap();

        assert_eq!(f.currency.calls.load(Ordering::SeqCst), 0);
        assert!(dash.features.target_currencies.is_none());
    }

    #[tokio::test]
    async fn full_request_populates_all_requested_fields() {
        let f = fixture(
            Features {
                temperature: true,
                precipitation: true,
                capital: true,
                coordinates: true,
                population: true,
                area: true,
                target_currencies: vec!["EUR".to_string()],
            },
            MockResolver::with(norway()),
            MockWeather::with(MeteoData {
                average_temp: 5.5,
                average_precipitation: 0.2,
            }),
            MockCurrency::with(CurrencyRates::from([("EUR".to_string(), 0.085)])),
        );

        let dash = f.service.build_dashboard("reg-1").await.unwrap();

        assert_eq!(dash.features.temperature, Some(5.5));
        assert_eq!(dash.features.precipitation, Some(0.2));
        assert_eq!(dash.features.capital.as_deref(), Some("Oslo"));
        assert_eq!(
            dash.features.coordinates,
            Some(Coordinates {
                latitude: 62.0,
                longitude: 10.0
            })
        );
        assert_eq!(dash.features.population, Some(5_379_475));
        assert_eq!(dash.features.area, Some(323_802.0));
        let age = Utc::now() - dash.last_retrieval;
        assert!(age.num_seconds() < 5);
    }
}
