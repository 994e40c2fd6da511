//! Rational linear algebra backing the Lie algebra example.
pub mod free_module;
pub mod matrix;

pub use free_module::FreeModule;
pub use matrix::Matrix;
