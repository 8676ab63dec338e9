pub mod fixtures;
pub mod id_sequence;
pub mod product {
    pub mod entity;
    pub mod repository;
}
