pub mod strategy;
pub mod test_construction_category;
pub mod test_lattice;
pub mod test_repr;
