//! Categories of mathematical structures, ordered by the subcategory relation.
//!
//! A [`Category`] is one of
//!
//! - a *named* category of the hierarchy ([`BaseCategory`]), such as `Sets` or `Modules(QQ)`,
//! - a *construction* category: the nested sub-definition a named category declares for a
//!   functorial construction, such as `Monoids().CartesianProducts()`,
//! - an *intersection* of incomparable categories.
//!
//! Categories are uniquely represented, and their super categories are computed once when the
//! category is first built.
pub mod functorial;
pub mod lattice;
pub mod types;

pub use functorial::*;
pub use lattice::{join, meet};
pub use types::*;
