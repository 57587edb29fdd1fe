use async_trait::async_trait;

use super::dashboards_model::Dashboard;
use crate::errors::Result;

/// Trait for dashboard assembly.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Assemble the dashboard for a registration.
    ///
    /// The only fatal error is a missing registration; provider failures
    /// degrade to omitted fields.
    async fn build_dashboard(&self, registration_id: &str) -> Result<Dashboard>;
}
