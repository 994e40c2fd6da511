pub mod test_cartesian_product;
