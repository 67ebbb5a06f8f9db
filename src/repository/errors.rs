use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The targeted row does not exist.
    #[error("entity not found")]
    NotFound,
    /// A product write referenced a brand that does not exist.
    #[error("referenced brand does not exist")]
    BrandMissing,
    #[error(transparent)]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
}
