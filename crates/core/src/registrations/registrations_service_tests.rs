#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::registrations::{
        Features, NewRegistration, Registration, RegistrationPatch, RegistrationRepositoryTrait,
        RegistrationService, RegistrationServiceTrait,
    };
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // --- Mock repository ---
    #[derive(Default)]
    struct MockRegistrationRepository {
        docs: Mutex<HashMap<String, Registration>>,
    }

    #[async_trait]
    impl RegistrationRepositoryTrait for MockRegistrationRepository {
        async fn insert(&self, registration: Registration) -> Result<Registration> {
            self.docs
                .lock()
                .unwrap()
                .insert(registration.id.clone(), registration.clone());
            Ok(registration)
        }

        async fn get_by_id(&self, id: &str) -> Result<Registration> {
            self.docs
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("registration {} not found", id)))
        }

        async fn list(&self) -> Result<Vec<Registration>> {
            Ok(self.docs.lock().unwrap().values().cloned().collect())
        }

        async fn update(&self, registration: Registration) -> Result<Registration> {
            let mut docs = self.docs.lock().unwrap();
            if !docs.contains_key(&registration.id) {
                return Err(Error::NotFound(format!(
                    "registration {} not found",
                    registration.id
                )));
            }
            docs.insert(registration.id.clone(), registration.clone());
            Ok(registration)
        }

        async fn delete(&self, id: &str) -> Result<()> {
            self.docs
                .lock()
                .unwrap()
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| Error::NotFound(format!("registration {} not found", id)))
        }
    }

    fn service() -> (RegistrationService, Arc<MockRegistrationRepository>) {
        let repo = Arc::new(MockRegistrationRepository::default());
        (RegistrationService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_assigns_id_and_last_change() {
        let (service, _) = service();
        let created = service
            .create(NewRegistration {
                country: "Norway".to_string(),
                iso_code: "NO".to_string(),
                features: Features::default(),
            })
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        let age = chrono::Utc::now() - created.last_change;
        assert!(age.num_seconds() < 5);
    }

    #[tokio::test]
    async fn patch_refreshes_last_change_only_on_real_changes() {
        let (service, _) = service();
        let created = service
            .create(NewRegistration {
                country: "Norway".to_string(),
                iso_code: "NO".to_string(),
                features: Features::default(),
            })
            .await
            .unwrap();

        // No-op patch: stored record untouched.
        let after_noop = service
            .patch(&created.id, RegistrationPatch::default())
            .await
            .unwrap();
        assert_eq!(after_noop.last_change, created.last_change);

        // Real change: last_change moves forward.
        let after_patch = service
            .patch(
                &created.id,
                RegistrationPatch {
                    iso_code: Some("SE".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(after_patch.iso_code, "SE");
        assert_eq!(after_patch.country, "Norway");
        assert!(after_patch.last_change >= created.last_change);
    }

    #[tokio::test]
    async fn replace_requires_existing_record() {
        let (service, _) = service();
        let err = service
            .replace("missing", NewRegistration::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_returns_the_deleted_record() {
        let (service, repo) = service();
        let created = service
            .create(NewRegistration {
                country: String::new(),
                iso_code: "NO".to_string(),
                features: Features::default(),
            })
            .await
            .unwrap();

        let deleted = service.delete(&created.id).await.unwrap();
        assert_eq!(deleted.country_key(), "NO");
        assert!(repo.docs.lock().unwrap().is_empty());
    }
}
