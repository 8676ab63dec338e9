use serde::Deserialize;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{
    ProductCode, ProductDate, ProductId, ProductImage,
};

use crate::fixtures::FixtureError;

/// Serialized shape of a seeded catalog entry.
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub product_code: u64,
    pub date: String,
    pub image: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, FixtureError> {
        let date = self
            .date
            .parse::<ProductDate>()
            .map_err(|_| FixtureError::InvalidDate(self.date.clone()))?;

        Ok(Product::from_repository(
            ProductId::new(self.id),
            self.name,
            ProductCode::new(self.product_code),
            date,
            ProductImage::new(self.image),
        ))
    }
}
