use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use crate::id_sequence::IdSequence;

/// Catalog list held in process memory. Lost on restart.
pub struct ProductRepositoryInMemory {
    products: RwLock<Vec<Product>>,
    ids: IdSequence,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            ids: IdSequence::starting_after(0),
        }
    }

    /// Seeds the list; new ids are issued past the highest seeded id.
    pub fn with_products(products: Vec<Product>) -> Self {
        let highest = products.iter().map(|p| p.id.value()).max().unwrap_or(0);
        Self {
            products: RwLock::new(products),
            ids: IdSequence::starting_after(highest),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn append(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(RepositoryError::Duplicated);
        }
        products.push(product.clone());
        Ok(())
    }

    async fn replace(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = product.clone();
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        products.remove(index);
        Ok(())
    }

    async fn next_id(&self) -> Result<ProductId, RepositoryError> {
        Ok(ProductId::new(self.ids.next()))
    }
}
