/// Failures reported by product storage adapters.
/// Variants carry code-style identifiers so callers can translate them.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// An entry with the same id is already stored.
    #[error("repository.duplicated")]
    Duplicated,
}
