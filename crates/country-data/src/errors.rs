//! Error types for the country data crate.

use thiserror::Error;

/// Errors that can occur while talking to an external data provider.
#[derive(Error, Debug)]
pub enum CountryDataError {
    /// The provider had no data for the requested country.
    /// This is a terminal error - retrying won't help.
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    /// The provider answered with a non-success HTTP status.
    #[error("Unexpected status from {provider}: {status}")]
    UnexpectedStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code received
        status: u16,
    },

    /// A provider-specific error occurred (malformed payload, error
    /// envelope, missing fields).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    /// Timeouts surface here as well and are treated like any other failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
