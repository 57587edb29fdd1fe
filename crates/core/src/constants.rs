//! Constants shared across the service.

/// API version segment of the base path.
pub const API_VERSION: &str = "v1";

/// Version string reported by the status endpoint.
pub const SERVICE_VERSION: &str = "v1.0.0";

/// Namespace prefix for country cache keys.
pub const COUNTRY_CACHE_PREFIX: &str = "country:";

/// Recorded TTL for country cache entries. Informational only: the read path
/// never checks it, the background purge uses its own retention window.
pub const COUNTRY_CACHE_TTL_HOURS: i64 = 24;

/// Retention window for the periodic cache purge, in hours.
pub const CACHE_RETENTION_HOURS: i64 = 24;

/// Timestamp format used in webhook payloads and creation responses.
pub const COMPACT_TIME_FORMAT: &str = "%Y%m%d %H:%M";
