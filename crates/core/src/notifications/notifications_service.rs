use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::notifications_model::{NewNotification, Notification};
use super::notifications_traits::{NotificationRepositoryTrait, NotificationServiceTrait};
use crate::errors::Result;

/// Service for managing webhook subscriptions.
pub struct NotificationService {
    repository: Arc<dyn NotificationRepositoryTrait>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn create(&self, new_notification: NewNotification) -> Result<Notification> {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            url: new_notification.url,
            country: new_notification.country,
            event: new_notification.event,
            created: Utc::now(),
        };
        self.repository.insert(notification).await
    }

    async fn get(&self, id: &str) -> Result<Notification> {
        self.repository.get_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<Notification>> {
        self.repository.list().await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await
    }
}
