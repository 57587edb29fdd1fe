//! Registrations module - domain models, services, and traits.

mod registrations_model;
mod registrations_service;
mod registrations_traits;


#[cfg(test)]
mod registrations_service_tests;

pub use registrations_model::{
    Features, NewRegistration, Registration, RegistrationCreated, RegistrationPatch,
};
pub use registrations_service::RegistrationService;
pub use registrations_traits::{RegistrationRepositoryTrait, RegistrationServiceTrait};
