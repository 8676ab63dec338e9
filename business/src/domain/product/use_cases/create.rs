use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{ProductDate, ProductImage};

#[derive(Debug)]
pub struct CreateProductParams {
    pub name: String,
    /// Raw code text; non-digits are dropped before parsing.
    pub product_code: String,
    pub date: Option<ProductDate>,
    pub image: Option<ProductImage>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
