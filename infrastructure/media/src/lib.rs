pub mod image_reader;
pub mod mime;
