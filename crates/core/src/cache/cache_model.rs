//! Cache entry domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached payload keyed by a composite namespace string
/// (e.g. `"country:NO"`).
///
/// `ttl_hours` records how long the payload was meant to stay valid but is
/// never consulted on the read path; entries are removed by the periodic
/// purge, which compares `last_fetched` against a fixed retention window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub key: String,
    pub data: Vec<u8>,
    pub last_fetched: DateTime<Utc>,
    pub ttl_hours: i64,
}
