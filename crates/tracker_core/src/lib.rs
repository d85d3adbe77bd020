//! Core domain logic for installation tracking.
//! This crate is the single source of truth for the typed field invariants.

pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use error::{FieldError, FieldResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::column::ColumnDefinition;
pub use model::field::Field;
pub use model::installation::Installation;
pub use model::kind::ColumnKind;
pub use model::request::FieldRequest;
pub use model::tracked::TrackedFields;
pub use model::value::FieldValue;
pub use model::weekly_review::{WeeklyReview, DEFAULT_REVIEW_TEXT};
pub use repo::memory_repo::{InMemoryRepository, RepoError, RepoResult, Repository};
pub use service::error::{ServiceError, ServiceResult};
pub use service::field_service::FieldService;
pub use service::installation_service::InstallationService;
pub use service::review_service::ReviewService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
