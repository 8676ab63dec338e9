use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Verify product exists
        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        product.apply(ProductFields {
            name: params.name,
            product_code: params.product_code,
            date: params.date,
            image: params.image,
        });

        self.repository
            .replace(&product)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
