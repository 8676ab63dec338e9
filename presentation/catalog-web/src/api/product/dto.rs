use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub product_code: u64,
    /// Date as dd.MM.yyyy
    pub date: String,
    /// Remote URL or data URI
    pub image: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            product_code: product.product_code.value(),
            date: product.date.to_string(),
            image: product.image.as_str().to_string(),
        }
    }
}
