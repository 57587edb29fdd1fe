//! Core error types for the Atlasboard application.
//!
//! Store-specific errors are converted into these types by the storage
//! layer; provider errors are wrapped so services can recover from them
//! locally where the design calls for partial results.

use thiserror::Error;

use atlasboard_country_data::CountryDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard service.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Input validation failed.
    #[error("Input validation failed: {0}")]
    Validation(String),

    /// A document store operation failed.
    #[error("Store operation failed: {0}")]
    Store(String),

    /// A cache store operation failed.
    #[error("Cache operation failed: {0}")]
    Cache(String),

    /// An external country data provider failed.
    #[error("Country data operation failed: {0}")]
    CountryData(#[from] CountryDataError),

    /// Unexpected error.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
