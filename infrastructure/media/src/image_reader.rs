use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use business::domain::catalog::services::{ImageFile, ImageReadError, ImageReaderService};
use business::domain::product::value_objects::ProductImage;

use crate::mime::sniff_image_mime;

/// Encodes uploaded image files as `data:` URIs.
pub struct ImageReaderBase64;

impl ImageReaderBase64 {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageReaderBase64 {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageReaderService for ImageReaderBase64 {
    async fn read_as_data_uri(&self, file: ImageFile) -> Result<ProductImage, ImageReadError> {
        let mime =
            sniff_image_mime(&file.bytes, &file.file_name).ok_or(ImageReadError::NotAnImage)?;
        Ok(ProductImage::new(format!(
            "data:{};base64,{}",
            mime,
            STANDARD.encode(&file.bytes)
        )))
    }
}
