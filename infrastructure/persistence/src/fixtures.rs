use std::collections::HashSet;

use thiserror::Error;

use business::domain::product::model::Product;

use crate::product::entity::ProductEntity;

/// Products the catalog starts with when seeding is enabled.
pub const DEFAULT_FIXTURES: &str = include_str!("../data/fixtures.json");

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("fixtures.malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("fixtures.invalid_date: {0}")]
    InvalidDate(String),
    #[error("fixtures.duplicated_id: {0}")]
    DuplicatedId(i64),
}

/// Parses a JSON array of products, keeping file order.
pub fn load(json: &str) -> Result<Vec<Product>, FixtureError> {
    let entities: Vec<ProductEntity> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();

    entities
        .into_iter()
        .map(|entity| {
            if !seen.insert(entity.id) {
                return Err(FixtureError::DuplicatedId(entity.id));
            }
            entity.into_domain()
        })
        .collect()
}

pub fn load_default() -> Result<Vec<Product>, FixtureError> {
    load(DEFAULT_FIXTURES)
}
