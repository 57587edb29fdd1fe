//! Status report model.

use serde::{Deserialize, Serialize};

/// Per-dependency health codes plus service metadata.
///
/// Dependency fields hold an HTTP-style code: 200 when the probe succeeded,
/// 503 otherwise. Field names are part of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub countries_api: u16,
    pub meteo_api: u16,
    pub currency_api: u16,
    pub notification_db: u16,
    /// Number of registered webhook subscriptions.
    pub webhooks: usize,
    pub version: String,
    /// Seconds since process start.
    pub uptime: u64,
}

impl StatusReport {
    /// Overall health: ok only when all four dependencies are ok.
    pub fn healthy(&self) -> bool {
        self.countries_api == 200
            && self.meteo_api == 200
            && self.currency_api == 200
            && self.notification_db == 200
    }
}
