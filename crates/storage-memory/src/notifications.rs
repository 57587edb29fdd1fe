//! Notification document store.

use async_trait::async_trait;
use dashmap::DashMap;

use atlasboard_core::errors::{Error, Result};
use atlasboard_core::notifications::{Notification, NotificationRepositoryTrait};

/// DashMap-backed webhook subscription store keyed by notification id.
#[derive(Default)]
pub struct InMemoryNotificationRepository {
    docs: DashMap<String, Notification>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepositoryTrait for InMemoryNotificationRepository {
    async fn insert(&self, notification: Notification) -> Result<Notification> {
        self.docs
            .insert(notification.id.clone(), notification.clone());
        Ok(notification)
    }

    async fn get_by_id(&self, id: &str) -> Result<Notification> {
        self.docs
            .get(id)
            .map(|doc| doc.clone())
            .ok_or_else(|| Error::NotFound(format!("notification {} not found", id)))
    }

    async fn list(&self) -> Result<Vec<Notification>> {
        Ok(self.docs.iter().map(|doc| doc.clone()).collect())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.docs
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("notification {} not found", id)))
    }
}
