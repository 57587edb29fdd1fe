//! External country data providers for Atlasboard.
//!
//! This crate contains the adapters for the three third-party APIs the
//! dashboard service draws from:
//! - REST Countries (country identity: capital, population, area,
//!   coordinates, base currency)
//! - Open-Meteo (hourly weather series, averaged)
//! - an exchange-rate API (rate table relative to a base currency)
//!
//! Each adapter owns its own `reqwest::Client` and implements one of the
//! provider traits in [`provider`]. The rest of the application only ever
//! talks to the traits, so test doubles can be injected freely.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::CountryDataError;
pub use models::{Coordinates, CountryInfo, CurrencyRates, MeteoData};
pub use provider::{
    CountryInfoProvider, CurrencyRatesProvider, ExchangeRateApiProvider, OpenMeteoProvider,
    RestCountriesProvider, WeatherProvider,
};
