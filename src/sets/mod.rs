//! Parents which are plain sets: finite enumerated sets and Cartesian products.
pub mod cartesian_product;
pub mod finite_enumerated_set;

pub use cartesian_product::CartesianProduct;
pub use finite_enumerated_set::FiniteEnumeratedSet;
