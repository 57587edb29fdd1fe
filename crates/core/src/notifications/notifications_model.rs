//! Webhook subscription domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle events a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Event {
    Register,
    Change,
    Delete,
    Invoke,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Event::Register => "REGISTER",
            Event::Change => "CHANGE",
            Event::Delete => "DELETE",
            Event::Invoke => "INVOKE",
        };
        write!(f, "{}", name)
    }
}

/// A webhook subscription. Immutable after creation except by deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub url: String,
    /// Country filter. Empty means the webhook applies to all countries.
    #[serde(default)]
    pub country: String,
    pub event: Event,
    pub created: DateTime<Utc>,
}

impl Notification {
    /// Whether this subscription matches a dispatched event.
    pub fn matches(&self, event: Event, country_key: &str) -> bool {
        self.event == event && (self.country.is_empty() || self.country == country_key)
    }
}

/// Input model for creating a new webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub url: String,
    #[serde(default)]
    pub country: String,
    pub event: Event,
}

/// Response body for a successful subscription creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationCreated {
    pub id: String,
}
