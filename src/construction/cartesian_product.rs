//! The Cartesian product functorial construction.
//!
//! [`cartesian_product`] takes a finite sequence of sets, and constructs their Cartesian
//! product:
//!
//! ```rust
//! use category_constructions::prelude::*;
//!
//! let a = FiniteEnumeratedSet::new(["a", "b", "c"]);
//! let b = FiniteEnumeratedSet::new([1, 2]);
//! let c = cartesian_product([Factor::from(a), Factor::from(b)]).unwrap();
//! assert_eq!(c.to_string(), "The cartesian product of ({'a', 'b', 'c'}, {1, 2})");
//! assert_eq!(c.an_element().unwrap().to_string(), "('a', 1)");
//! ```
//!
//! If the factors carry more structure, the product carries it too: a Cartesian product of
//! monoids lies in `Monoids().CartesianProducts()`, a subcategory of monoids, whose unit is the
//! tuple of the units of the factors.
//!
//! ```rust
//! use category_constructions::prelude::*;
//!
//! let m = FreeMonoid::example();
//! m.rename("M");
//! let c = cartesian_product([
//!     Factor::from(m),
//!     Factor::from(IntegerRing::new()),
//!     Factor::from(RationalField::new()),
//! ])
//! .unwrap();
//! assert_eq!(c.to_string(), "The cartesian product of (M, Integer Ring, Rational Field)");
//! assert_eq!(c.category().to_string(), "Category of Cartesian products of monoids");
//! assert_eq!(c.an_element().unwrap().to_string(), "('abcd', 1, 1/2)");
//! assert_eq!(c.one().unwrap().to_string(), "('', 1, 1)");
//! ```
use core::fmt;
use std::collections::BTreeSet;
use std::rc::Rc;

use tracing::debug;

use super::covariant::CovariantFunctorialConstruction;
use super::registry::Construction;
use crate::category::Category;
use crate::element::Element;
use crate::error::CategoryError;
use crate::parent::{Parent, ParentRef};
use crate::sets::{CartesianProduct, FiniteEnumeratedSet};

/// A plain container of values, accepted in place of a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlainContainer {
    Tuple(Vec<Element>),
    List(Vec<Element>),
    Set(BTreeSet<Element>),
    FrozenSet(BTreeSet<Element>),
}

impl PlainContainer {
    /// The values in iteration order.
    pub fn into_elements(self) -> Vec<Element> {
        match self {
            PlainContainer::Tuple(v) | PlainContainer::List(v) => v,
            PlainContainer::Set(s) | PlainContainer::FrozenSet(s) => s.into_iter().collect(),
        }
    }
}

/// An argument of [`cartesian_product`]: a parent, or a plain container to be read as a finite
/// enumerated set.
#[derive(Clone)]
pub enum Factor {
    Parent(ParentRef),
    Container(PlainContainer),
}

impl Factor {
    pub fn list<I: IntoIterator<Item = T>, T: Into<Element>>(items: I) -> Self {
        Factor::Container(PlainContainer::List(
            items.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn tuple<I: IntoIterator<Item = T>, T: Into<Element>>(items: I) -> Self {
        Factor::Container(PlainContainer::Tuple(
            items.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn set<I: IntoIterator<Item = T>, T: Into<Element>>(items: I) -> Self {
        Factor::Container(PlainContainer::Set(
            items.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn frozen_set<I: IntoIterator<Item = T>, T: Into<Element>>(items: I) -> Self {
        Factor::Container(PlainContainer::FrozenSet(
            items.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Factor::Container(_))
    }

    fn into_parent(self) -> ParentRef {
        match self {
            Factor::Parent(p) => p,
            Factor::Container(c) => FiniteEnumeratedSet::new(c.into_elements()),
        }
    }
}

impl<T: Parent + 'static> From<Rc<T>> for Factor {
    fn from(parent: Rc<T>) -> Self {
        Factor::Parent(parent)
    }
}

impl From<PlainContainer> for Factor {
    fn from(container: PlainContainer) -> Self {
        Factor::Container(container)
    }
}

/// The Cartesian product functor. It is a singleton: all values are the same construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartesianProductFunctor;

impl CartesianProductFunctor {
    /// Apply the construction.
    ///
    /// On top of [`CovariantFunctorialConstruction::apply`] this accepts plain containers,
    /// which turn every container argument into a [`FiniteEnumeratedSet`], and handles the empty
    /// product, which is the one-element set `{()}` in `Sets().CartesianProducts()`.
    ///
    /// ```rust
    /// use category_constructions::prelude::*;
    ///
    /// let c = cartesian_product([Factor::list([0, 1]), Factor::tuple(["a", "b", "c"])]).unwrap();
    /// assert_eq!(c.to_string(), "The cartesian product of ({0, 1}, {'a', 'b', 'c'})");
    /// assert_eq!(
    ///     c.category().to_string(),
    ///     "Category of Cartesian products of finite enumerated sets"
    /// );
    ///
    /// let e = cartesian_product([]).unwrap();
    /// assert_eq!(e.to_string(), "The cartesian product of ()");
    /// assert_eq!(e.cardinality(), Cardinality::Finite(1));
    /// assert_eq!(e.an_element().unwrap().to_string(), "()");
    /// ```
    pub fn call<I: IntoIterator<Item = Factor>>(&self, args: I) -> Result<ParentRef, CategoryError> {
        let args: Vec<Factor> = args.into_iter().collect();

        if args.is_empty() {
            debug!("empty cartesian product");
            let category = Category::sets().cartesian_products()?;
            return Ok(CartesianProduct::new(vec![], category));
        }

        if args.iter().any(Factor::is_container) {
            debug!("reading plain containers as finite enumerated sets");
        }
        let parents = args.into_iter().map(Factor::into_parent).collect();
        self.apply(parents)
    }

    pub fn symbol(&self) -> String {
        self.construction().symbol().unwrap_or_default().to_string()
    }
}

impl CovariantFunctorialConstruction for CartesianProductFunctor {
    fn construction(&self) -> Construction {
        Construction::cartesian_product()
    }

    fn construct(
        &self,
        parents: Vec<ParentRef>,
        category: Category,
    ) -> Result<ParentRef, CategoryError> {
        Ok(CartesianProduct::new(parents, category))
    }
}

impl fmt::Display for CartesianProductFunctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.construction())
    }
}

/// The Cartesian product of `args`; see [`CartesianProductFunctor::call`].
pub fn cartesian_product<I: IntoIterator<Item = Factor>>(args: I) -> Result<ParentRef, CategoryError> {
    CartesianProductFunctor.call(args)
}
