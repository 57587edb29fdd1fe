//! Registration document store.

use async_trait::async_trait;
use dashmap::DashMap;

use atlasboard_core::errors::{Error, Result};
use atlasboard_core::registrations::{Registration, RegistrationRepositoryTrait};

/// DashMap-backed registration store keyed by registration id.
#[derive(Default)]
pub struct InMemoryRegistrationRepository {
    docs: DashMap<String, Registration>,
}

impl InMemoryRegistrationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationRepositoryTrait for InMemoryRegistrationRepository {
    async fn insert(&self, registration: Registration) -> Result<Registration> {
        self.docs
            .insert(registration.id.clone(), registration.clone());
        Ok(registration)
    }

    async fn get_by_id(&self, id: &str) -> Result<Registration> {
        self.docs
            .get(id)
            .map(|doc| doc.clone())
            .ok_or_else(|| Error::NotFound(format!("registration {} not found", id)))
    }

    async fn list(&self) -> Result<Vec<Registration>> {
        Ok(self.docs.iter().map(|doc| doc.clone()).collect())
    }

    async fn update(&self, registration: Registration) -> Result<Registration> {
        if !self.docs.contains_key(&registration.id) {
            return Err(Error::NotFound(format!(
                "registration {} not found",
                registration.id
            )));
        }
        self.docs
            .insert(registration.id.clone(), registration.clone());
        Ok(registration)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.docs
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("registration {} not found", id)))
    }
}
