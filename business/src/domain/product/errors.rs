#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.required_fields_missing")]
    Validation,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Maps a repository lookup failure, keeping `NotFound` as a product error.
    pub fn from_lookup(error: crate::domain::errors::RepositoryError) -> Self {
        match error {
            crate::domain::errors::RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
