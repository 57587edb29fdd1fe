use async_trait::async_trait;

use crate::notifications::Event;

/// Trait for webhook dispatch.
///
/// Dispatch is fire-and-forget: implementations never return an error, they
/// log delivery failures and move on. Callers are expected to run dispatch
/// on a detached task so it cannot block a response path.
#[async_trait]
pub trait WebhookDispatcherTrait: Send + Sync {
    async fn dispatch(&self, event: Event, country_key: &str);
}
