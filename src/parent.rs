//! Parents: mathematical objects whose elements are [`Element`]s and whose behaviour is
//! determined by their [`Category`].
use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use crate::algebra::free_module::FreeModule;
use crate::category::Category;
use crate::element::Element;
use crate::error::CategoryError;
use crate::rings::Ring;

pub type ParentRef = Rc<dyn Parent>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    Finite(u128),
    Infinite,
}

impl Cardinality {
    pub fn is_finite(&self) -> bool {
        matches!(self, Cardinality::Finite(_))
    }

    /// The cardinality of a cartesian product of sets of cardinalities `factors`.
    ///
    /// An empty factor makes the product empty. A count which does not fit in a `u128` is
    /// reported as `Infinite`, like the products which can not be enumerated.
    pub fn product<I: IntoIterator<Item = Cardinality>>(factors: I) -> Cardinality {
        let mut count = Some(1u128);
        for c in factors {
            match c {
                Cardinality::Finite(0) => return Cardinality::Finite(0),
                Cardinality::Finite(n) => count = count.and_then(|m| m.checked_mul(n)),
                Cardinality::Infinite => count = None,
            }
        }
        count.map_or(Cardinality::Infinite, Cardinality::Finite)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::Finite(n) => write!(f, "{n}"),
            Cardinality::Infinite => write!(f, "+Infinity"),
        }
    }
}

/// The normalized constructor arguments of a parent: the key of its unique representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParentKey {
    IntegerRing,
    RationalField,
    FiniteEnumeratedSet(Vec<Element>),
    FreeMonoid(Vec<char>),
    CartesianProduct {
        factors: Vec<ParentKey>,
        category: Category,
    },
    AbelianLieAlgebra {
        ring: Ring,
        module: FreeModule,
        ambient: Option<Box<ParentKey>>,
    },
}

/// A custom name given to a parent with [`Parent::rename`].
#[derive(Debug, Default)]
pub struct ParentName(RefCell<Option<String>>);

impl ParentName {
    pub fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    pub fn set(&self, name: Option<&str>) {
        *self.0.borrow_mut() = name.map(str::to_string);
    }
}

/// A mathematical object with elements, living in some category.
///
/// Parents are uniquely represented: constructors return a shared instance for equal
/// [`ParentKey`]s, so two parents are equal exactly when they are the same instance
/// (see [`same_parent`]).
pub trait Parent: fmt::Display {
    fn key(&self) -> ParentKey;

    fn category(&self) -> Category;

    /// Some element of the parent.
    fn an_element(&self) -> Result<Element, CategoryError>;

    fn cardinality(&self) -> Cardinality;

    fn contains(&self, x: &Element) -> bool;

    /// Enumerate the elements of a finite parent.
    fn iter(&self) -> Option<Box<dyn Iterator<Item = Element> + '_>> {
        None
    }

    /// The multiplicative unit, when the category is a subcategory of monoids.
    fn one(&self) -> Result<Element, CategoryError> {
        Err(CategoryError::MissingStructure {
            operation: "one()",
            category: self.category().to_string(),
        })
    }

    /// The product `x * y`, when the category is a subcategory of magmas.
    fn product(&self, x: &Element, y: &Element) -> Result<Element, CategoryError> {
        let _ = (x, y);
        Err(CategoryError::MissingStructure {
            operation: "product()",
            category: self.category().to_string(),
        })
    }

    fn name(&self) -> &ParentName;

    /// Replace the printed representation of this parent by `name`.
    fn rename(&self, name: &str) {
        self.name().set(Some(name));
    }

    fn reset_name(&self) {
        self.name().set(None);
    }

    /// All elements, for finite enumerable parents.
    fn list(&self) -> Option<Vec<Element>> {
        match self.cardinality() {
            Cardinality::Finite(_) => self.iter().map(|it| it.collect()),
            Cardinality::Infinite => None,
        }
    }

    /// `x^n`; `x^0` is [`Parent::one`].
    fn power(&self, x: &Element, n: u32) -> Result<Element, CategoryError> {
        if n == 0 {
            return self.one();
        }
        if !self.contains(x) {
            return Err(CategoryError::NotAnElement {
                element: x.to_string(),
                parent: self.to_string(),
            });
        }
        let mut acc = x.clone();
        for _ in 1..n {
            acc = self.product(&acc, x)?;
        }
        Ok(acc)
    }

    /// The category of this parent and all its super categories.
    fn categories(&self) -> Vec<Category> {
        self.category().all_super_categories()
    }

    /// Is the category of this parent a subcategory of `category`?
    fn is_in(&self, category: &Category) -> bool {
        self.category().is_subcategory(category)
    }
}

/// Unique representation makes identity the equality of parents.
pub fn same_parent(a: &ParentRef, b: &ParentRef) -> bool {
    Rc::ptr_eq(a, b)
}

/// Error helper for elements which do not belong to `parent`.
pub(crate) fn not_an_element(x: &Element, parent: &dyn Parent) -> CategoryError {
    CategoryError::NotAnElement {
        element: x.to_string(),
        parent: parent.to_string(),
    }
}
