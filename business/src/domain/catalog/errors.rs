use crate::domain::product::errors::ProductError;

#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error("dialog.not_open")]
    NotOpen,
    #[error("dialog.already_open")]
    AlreadyOpen,
    #[error("dialog.invalid_date")]
    InvalidDate,
    #[error(transparent)]
    Product(#[from] ProductError),
}
