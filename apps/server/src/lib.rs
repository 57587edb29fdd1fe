//! Atlasboard HTTP server library.
//!
//! Exposed as a library so integration tests can build the router against
//! stub providers.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;
pub mod scheduler;

pub use config::Config;
pub use main_lib::{build_state, build_state_with_providers, init_tracing, AppState};
