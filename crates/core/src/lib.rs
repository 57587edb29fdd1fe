//! Core domain logic for Atlasboard.
//!
//! This crate is storage- and transport-agnostic: repositories and external
//! providers are consumed through traits and injected via constructors. The
//! HTTP layer lives in `apps/server`, the document store in
//! `atlasboard-storage-memory`, the provider adapters in
//! `atlasboard-country-data`.

pub mod constants;
pub mod errors;

pub mod cache;
pub mod country;
pub mod dashboards;
pub mod notifications;
pub mod registrations;
pub mod status;
pub mod webhooks;

pub use errors::{Error, Result};
