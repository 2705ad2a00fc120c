//! Application use cases. Orchestrate domain logic via ports.

pub mod migration_service;
pub mod validation_service;

pub use migration_service::MigrationService;
pub use validation_service::{ValidationFailure, ValidationReport, ValidationService};
