use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod brands;
pub mod products;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer to the route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The targeted entity does not exist.
    #[error("entity not found")]
    NotFound,
    /// A product operation referenced a brand that does not exist.
    #[error("referenced brand does not exist")]
    BrandMissing,
    /// A submitted form failed validation.
    #[error("{0}")]
    Form(String),
    /// Any other persistence-layer failure.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::BrandMissing => Self::BrandMissing,
            other => Self::Repository(other),
        }
    }
}
