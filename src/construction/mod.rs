//! Functorial constructions: named operations mapping categories to derived categories and
//! parents to derived parents, compatibly.
pub mod cartesian_product;
pub mod covariant;
pub mod registry;

pub use cartesian_product::*;
pub use covariant::*;
pub use registry::{Construction, ConstructionDescriptor, ConstructionRegistry};
