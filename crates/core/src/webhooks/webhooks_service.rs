//! Best-effort webhook delivery.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::webhooks_traits::WebhookDispatcherTrait;
use crate::constants::COMPACT_TIME_FORMAT;
use crate::notifications::{Event, NotificationRepositoryTrait};

/// Per-delivery timeout. One slow subscriber must not hold up the rest for
/// long, and there is no retry.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Body POSTed to each matching subscriber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub id: String,
    pub country: String,
    pub event: Event,
    /// Dispatch time in the compact `%Y%m%d %H:%M` format.
    pub time: String,
}

/// Loads all subscriptions, filters by event and country, and POSTs the
/// payload to each match independently. Failures are logged, never surfaced.
pub struct WebhookDispatcher {
    repository: Arc<dyn NotificationRepositoryTrait>,
    client: Client,
}

impl WebhookDispatcher {
    pub fn new(repository: Arc<dyn NotificationRepositoryTrait>) -> Self {
        let client = Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { repository, client }
    }
}

#[async_trait]
impl WebhookDispatcherTrait for WebhookDispatcher {
    async fn dispatch(&self, event: Event, country_key: &str) {
        let notifications = match self.repository.list().await {
            Ok(notifications) => notifications,
            Err(e) => {
                warn!("[webhook] Could not load subscriptions: {}", e);
                return;
            }
        };

        let relevant: Vec<_> = notifications
            .into_iter()
            .filter(|n| n.matches(event, country_key))
            .collect();

        if relevant.is_empty() {
            debug!(
                "[webhook] No matching subscriptions for event={} country={}",
                event, country_key
            );
            return;
        }

        let time = Utc::now().format(COMPACT_TIME_FORMAT).to_string();
        for subscription in relevant {
            let payload = WebhookPayload {
                id: subscription.id.clone(),
                country: country_key.to_string(),
                event,
                time: time.clone(),
            };

            // Each delivery is independent; one failure never affects the
            // others.
            match self.client.post(&subscription.url).json(&payload).send().await {
                Ok(response) if response.status().is_success() => {
                    info!(
                        "[webhook] Delivered event={} country={} to {}",
                        event, country_key, subscription.url
                    );
                }
                Ok(response) => {
                    warn!(
                        "[webhook] {} responded {} for event={}",
                        subscription.url,
                        response.status(),
                        event
                    );
                }
                Err(e) => {
                    warn!("[webhook] Failed POST to {}: {}", subscription.url, e);
                }
            }
        }
    }
}
