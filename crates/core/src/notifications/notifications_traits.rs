use async_trait::async_trait;

use super::notifications_model::{NewNotification, Notification};
use crate::errors::Result;

/// Trait for notification store operations.
#[async_trait]
pub trait NotificationRepositoryTrait: Send + Sync {
    async fn insert(&self, notification: Notification) -> Result<Notification>;
    async fn get_by_id(&self, id: &str) -> Result<Notification>;
    async fn list(&self) -> Result<Vec<Notification>>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Trait for notification service operations. Subscriptions are never
/// updated, so the surface is a CRUD subset.
#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    async fn create(&self, new_notification: NewNotification) -> Result<Notification>;
    async fn get(&self, id: &str) -> Result<Notification>;
    async fn list(&self) -> Result<Vec<Notification>>;
    async fn delete(&self, id: &str) -> Result<()>;
}
