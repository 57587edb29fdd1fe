//! In-memory document store for Atlasboard.
//!
//! Implements the repository traits defined in `atlasboard-core` on top of
//! concurrent hash maps. It is the only crate that knows how documents are
//! held; everything else works against the traits.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-memory (this crate)
//!       │
//!       ▼
//!   DashMap documents
//! ```
//!
//! Per-document atomicity comes from DashMap's sharded locking. The store
//! offers no cross-document transactions; the domain design does not need
//! them.

pub mod cache;
pub mod notifications;
pub mod registrations;

pub use cache::InMemoryCacheRepository;
pub use notifications::InMemoryNotificationRepository;
pub use registrations::InMemoryRegistrationRepository;

// Re-export from atlasboard-core for convenience
pub use atlasboard_core::errors::{Error, Result};
