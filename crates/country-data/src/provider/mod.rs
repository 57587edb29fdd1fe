//! Provider adapters and the traits they implement.

mod traits;

pub mod exchange_rate_api;
pub mod open_meteo;
pub mod rest_countries;

pub use exchange_rate_api::ExchangeRateApiProvider;
pub use open_meteo::OpenMeteoProvider;
pub use rest_countries::RestCountriesProvider;
pub use traits::{CountryInfoProvider, CurrencyRatesProvider, WeatherProvider};
