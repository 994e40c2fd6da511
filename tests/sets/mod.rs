pub mod test_finite_enumerated_set;
