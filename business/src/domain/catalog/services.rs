use async_trait::async_trait;

use crate::domain::product::value_objects::ProductImage;

/// An image chosen in the add dialog's file picker, as uploaded by the browser.
///
/// `file_name` is only a hint for type detection and logging; it is never
/// opened on the server.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageReadError {
    #[error("image.not_an_image")]
    NotAnImage,
}

/// Service port turning a selected file into a self-contained data URI.
#[async_trait]
pub trait ImageReaderService: Send + Sync {
    async fn read_as_data_uri(&self, file: ImageFile) -> Result<ProductImage, ImageReadError>;
}
