use async_trait::async_trait;

use super::registrations_model::{NewRegistration, Registration, RegistrationPatch};
use crate::errors::Result;

/// Trait for registration store operations.
#[async_trait]
pub trait RegistrationRepositoryTrait: Send + Sync {
    async fn insert(&self, registration: Registration) -> Result<Registration>;
    async fn get_by_id(&self, id: &str) -> Result<Registration>;
    async fn list(&self) -> Result<Vec<Registration>>;
    /// Replace an existing record. Fails with `NotFound` when absent.
    async fn update(&self, registration: Registration) -> Result<Registration>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Trait for registration service operations.
#[async_trait]
pub trait RegistrationServiceTrait: Send + Sync {
    async fn create(&self, new_registration: NewRegistration) -> Result<Registration>;
    async fn get(&self, id: &str) -> Result<Registration>;
    async fn list(&self) -> Result<Vec<Registration>>;
    async fn replace(&self, id: &str, new_registration: NewRegistration) -> Result<Registration>;
    /// Merge a partial update into the stored record and return the
    /// post-mutation state.
    async fn patch(&self, id: &str, patch: RegistrationPatch) -> Result<Registration>;
    /// Delete a registration, returning the deleted record.
    async fn delete(&self, id: &str) -> Result<Registration>;
}
