//! Webhooks module - best-effort event fan-out to subscribed URLs.

mod webhooks_service;
mod webhooks_traits;


pub use webhooks_service::{WebhookDispatcher, WebhookPayload};
pub use webhooks_traits::WebhookDispatcherTrait;
