use core::fmt;
use std::rc::Rc;

use crate::category::Category;
use crate::element::{write_separated, Element};
use crate::error::CategoryError;
use crate::parent::{Cardinality, Parent, ParentKey, ParentName};
use crate::unique::UniqueCache;

/// A finite set given by the list of its elements, enumerated in that order.
#[derive(Debug)]
pub struct FiniteEnumeratedSet {
    elements: Vec<Element>,
    name: ParentName,
}

thread_local! {
    static FINITE_ENUMERATED_SETS: UniqueCache<Vec<Element>, FiniteEnumeratedSet> = UniqueCache::new();
}

impl FiniteEnumeratedSet {
    /// The finite enumerated set of `elements`. Repeated elements keep their first position.
    ///
    /// ```rust
    /// # use category_constructions::prelude::*;
    /// # use std::rc::Rc;
    /// let a = FiniteEnumeratedSet::new([1, 2, 1]);
    /// assert_eq!(a.to_string(), "{1, 2}");
    /// assert!(Rc::ptr_eq(&a, &FiniteEnumeratedSet::new([1, 2])));
    /// ```
    pub fn new<I: IntoIterator<Item = T>, T: Into<Element>>(elements: I) -> Rc<Self> {
        let mut distinct: Vec<Element> = Vec::new();
        for x in elements.into_iter().map(Into::into) {
            if !distinct.contains(&x) {
                distinct.push(x);
            }
        }
        FINITE_ENUMERATED_SETS.with(|cache| {
            cache.get_or_insert_with(distinct.clone(), || FiniteEnumeratedSet {
                elements: distinct,
                name: ParentName::default(),
            })
        })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The position of `x` in the enumeration.
    pub fn rank(&self, x: &Element) -> Option<usize> {
        self.elements.iter().position(|y| y == x)
    }

    /// The element at position `i` of the enumeration.
    pub fn unrank(&self, i: usize) -> Option<&Element> {
        self.elements.get(i)
    }
}

impl Parent for FiniteEnumeratedSet {
    fn key(&self) -> ParentKey {
        ParentKey::FiniteEnumeratedSet(self.elements.clone())
    }

    fn category(&self) -> Category {
        Category::finite_enumerated_sets()
    }

    fn an_element(&self) -> Result<Element, CategoryError> {
        self.elements
            .first()
            .cloned()
            .ok_or_else(|| CategoryError::EmptyParent {
                parent: self.to_string(),
            })
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Finite(self.elements.len() as u128)
    }

    fn contains(&self, x: &Element) -> bool {
        self.elements.contains(x)
    }

    fn iter(&self) -> Option<Box<dyn Iterator<Item = Element> + '_>> {
        Some(Box::new(self.elements.iter().cloned()))
    }

    fn name(&self) -> &ParentName {
        &self.name
    }
}

impl fmt::Display for FiniteEnumeratedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name.get() {
            return write!(f, "{name}");
        }
        write!(f, "{{")?;
        write_separated(f, &self.elements)?;
        write!(f, "}}")
    }
}
