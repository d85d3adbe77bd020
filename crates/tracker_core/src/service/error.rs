//! Service-level error shared by all use-case services.

use crate::error::FieldError;
use crate::repo::memory_repo::RepoError;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Addressed entity does not exist.
    #[error("{entity} not found at index {index}")]
    NotFound { entity: &'static str, index: usize },
    /// Field model rejected the input.
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, index } => Self::NotFound { entity, index },
        }
    }
}
