use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{ProductCode, ProductDate, ProductId, ProductImage};

#[derive(Debug)]
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub product_code: ProductCode,
    pub date: ProductDate,
    pub image: ProductImage,
}

impl From<Product> for UpdateProductParams {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            product_code: product.product_code,
            date: product.date,
            image: product.image,
        }
    }
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
