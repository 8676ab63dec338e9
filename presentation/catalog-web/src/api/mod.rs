pub mod dialog;
pub mod error;
pub mod health;
pub mod page;
pub mod product;
pub mod tags;
