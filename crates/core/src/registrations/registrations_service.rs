use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::registrations_model::{NewRegistration, Registration, RegistrationPatch};
use super::registrations_traits::{RegistrationRepositoryTrait, RegistrationServiceTrait};
use crate::errors::Result;

/// Service for managing dashboard registrations.
pub struct RegistrationService {
    repository: Arc<dyn RegistrationRepositoryTrait>,
}

impl RegistrationService {
    pub fn new(repository: Arc<dyn RegistrationRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RegistrationServiceTrait for RegistrationService {
    async fn create(&self, new_registration: NewRegistration) -> Result<Registration> {
        let registration = Registration {
            id: Uuid::new_v4().to_string(),
            country: new_registration.country,
            iso_code: new_registration.iso_code,
            features: new_registration.features,
            last_change: Utc::now(),
        };
        debug!(
            "Creating registration {} for '{}'",
            registration.id,
            registration.country_key()
        );
        self.repository.insert(registration).await
    }

    async fn get(&self, id: &str) -> Result<Registration> {
        self.repository.get_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<Registration>> {
        self.repository.list().await
    }

    async fn replace(&self, id: &str, new_registration: NewRegistration) -> Result<Registration> {
        // Full replace still requires the record to exist.
        let existing = self.repository.get_by_id(id).await?;
        let updated = Registration {
            id: existing.id,
            country: new_registration.country,
            iso_code: new_registration.iso_code,
            features: new_registration.features,
            last_change: Utc::now(),
        };
        self.repository.update(updated).await
    }

    async fn patch(&self, id: &str, patch: RegistrationPatch) -> Result<Registration> {
        let mut registration = self.repository.get_by_id(id).await?;
        if !registration.apply_patch(&patch) {
            // Nothing changed, skip the write and keep last_change as-is.
            debug!("Patch for registration {} was a no-op", id);
            return Ok(registration);
        }
        registration.last_change = Utc::now();
        self.repository.update(registration).await
    }

    async fn delete(&self, id: &str) -> Result<Registration> {
        let existing = self.repository.get_by_id(id).await?;
        self.repository.delete(id).await?;
        Ok(existing)
    }
}
