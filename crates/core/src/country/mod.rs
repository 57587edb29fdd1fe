//! Country module - cache-aside resolver for country identity data.

mod country_resolver;

#[cfg(test)]
mod country_resolver_tests;

pub use country_resolver::{CountryResolver, CountryResolverTrait};
