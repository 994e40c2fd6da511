//! The abelian Lie algebra example: a finite dimensional Lie algebra with basis.
pub mod abelian;
pub mod enveloping;

pub use abelian::{AbelianLieAlgebra, LieElement};
pub use enveloping::{LinearPolynomial, UniversalEnvelopingAlgebra};
