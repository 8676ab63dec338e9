use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductId;

/// Ordered product list. `get_all` returns insertion order.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Adds a product at the end of the list.
    async fn append(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Overwrites the product with the same id, keeping its position.
    async fn replace(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
    /// Issues an id that has never been handed out before.
    async fn next_id(&self) -> Result<ProductId, RepositoryError>;
}
