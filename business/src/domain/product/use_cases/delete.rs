use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

#[derive(Debug)]
pub struct DeleteProductParams {
    pub id: ProductId,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
