//! # Category constructions
//!
//! A small lattice of algebraic [categories](crate::category::Category) (sets, magmas, monoids,
//! modules over a ring, Lie algebras, ...) closed under *functorial constructions*: Cartesian
//! products, subquotients, subobjects and duals.
//!
//! A [construction](crate::construction::Construction) `F` maps a category `C` to the category
//! `F(C)` of objects built by `F` out of objects of `C`. The construction category of `C` lies
//! below the construction categories of the super categories of `C` (covariance), is computed
//! once and shared (unique representation), and `F(F(C)) = F(C)`.
//!
//! ```rust
//! use category_constructions::prelude::*;
//!
//! let c = Category::monoids().cartesian_products().unwrap();
//! assert_eq!(c.to_string(), "Category of Cartesian products of monoids");
//! assert!(c.is_subcategory(&Category::sets().cartesian_products().unwrap()));
//! assert_eq!(c.cartesian_products().unwrap(), c);
//! ```
//!
//! # Parents
//!
//! Objects of categories are [parents](crate::parent::Parent). Applying a covariant construction
//! to parents computes the category of the result as the construction category of the join of
//! the categories of the arguments:
//!
//! ```rust
//! use category_constructions::prelude::*;
//!
//! let c = cartesian_product([
//!     Factor::list([0, 1]),
//!     Factor::tuple(["a", "b", "c"]),
//! ])
//! .unwrap();
//! assert_eq!(c.to_string(), "The cartesian product of ({0, 1}, {'a', 'b', 'c'})");
//! assert_eq!(c.cardinality(), Cardinality::Finite(6));
//! ```
//!
//! Registries and caches are thread-local: categories and parents are `Rc`-based and are not
//! shared between threads.

pub mod category;
pub mod construction;
pub mod unique;

pub mod element;
pub mod error;
pub mod parent;

pub mod algebra;
pub mod lie_algebras;
pub mod monoids;
pub mod rings;
pub mod sets;

pub mod prelude {
    //! The public names of the crate.
    pub use crate::category::{join, meet, BaseCategory, Category, CategoryKind};
    pub use crate::category::SupportsConstruction;
    pub use crate::construction::registry::{declare, declares, register, resolve, with_registry};
    pub use crate::construction::{
        cartesian_product, CartesianProductFunctor, Construction, ConstructionDescriptor,
        ConstructionRegistry, CovariantFunctorialConstruction, Factor, PlainContainer,
    };

    pub use crate::element::Element;
    pub use crate::error::CategoryError;
    pub use crate::parent::{same_parent, Cardinality, Parent, ParentKey, ParentRef};

    pub use crate::algebra::{FreeModule, Matrix};
    pub use crate::lie_algebras::{AbelianLieAlgebra, LieElement, LinearPolynomial};
    pub use crate::monoids::FreeMonoid;
    pub use crate::rings::{IntegerRing, RationalField, Ring, QQ, ZZ};
    pub use crate::sets::{CartesianProduct, FiniteEnumeratedSet};
}
