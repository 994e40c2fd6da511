//! Example monoids.
pub mod free_monoid;

pub use free_monoid::FreeMonoid;
