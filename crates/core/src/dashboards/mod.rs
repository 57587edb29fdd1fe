//! Dashboards module - the assembly orchestration at the heart of the
//! service.

mod dashboards_model;
mod dashboards_service;
mod dashboards_traits;

#[cfg(test)]
mod dashboards_service_tests;

pub use dashboards_model::{Dashboard, DashboardFeatures};
pub use dashboards_service::DashboardService;
pub use dashboards_traits::DashboardServiceTrait;
