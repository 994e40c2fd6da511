use core::fmt;
use std::rc::Rc;

use num_rational::Rational64;
use num_traits::{CheckedMul, One};

use crate::category::{meet, Category};
use crate::element::Element;
use crate::error::CategoryError;
use crate::parent::{not_an_element, Cardinality, Parent, ParentKey, ParentName};

/// The ring of integers `ZZ`, as a multiplicative monoid.
#[derive(Debug, Default)]
pub struct IntegerRing {
    name: ParentName,
}

/// The field of rational numbers `QQ`, as a multiplicative monoid.
#[derive(Debug, Default)]
pub struct RationalField {
    name: ParentName,
}

thread_local! {
    static INTEGER_RING: Rc<IntegerRing> = Rc::new(IntegerRing::default());
    static RATIONAL_FIELD: Rc<RationalField> = Rc::new(RationalField::default());
}

impl IntegerRing {
    /// The unique instance.
    pub fn new() -> Rc<IntegerRing> {
        INTEGER_RING.with(Rc::clone)
    }
}

impl RationalField {
    /// The unique instance.
    pub fn new() -> Rc<RationalField> {
        RATIONAL_FIELD.with(Rc::clone)
    }
}

impl Parent for IntegerRing {
    fn key(&self) -> ParentKey {
        ParentKey::IntegerRing
    }

    fn category(&self) -> Category {
        meet(&[
            Category::euclidean_domains(),
            Category::infinite_enumerated_sets(),
        ])
    }

    fn an_element(&self) -> Result<Element, CategoryError> {
        Ok(Element::Integer(1))
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Infinite
    }

    fn contains(&self, x: &Element) -> bool {
        matches!(x, Element::Integer(_))
    }

    fn one(&self) -> Result<Element, CategoryError> {
        Ok(Element::Integer(1))
    }

    fn product(&self, x: &Element, y: &Element) -> Result<Element, CategoryError> {
        match (x, y) {
            (Element::Integer(a), Element::Integer(b)) => i64::checked_mul(*a, *b)
                .map(Element::Integer)
                .ok_or(CategoryError::Overflow {
                    operation: "integer product",
                }),
            (Element::Integer(_), _) => Err(not_an_element(y, self)),
            _ => Err(not_an_element(x, self)),
        }
    }

    fn name(&self) -> &ParentName {
        &self.name
    }
}

impl Parent for RationalField {
    fn key(&self) -> ParentKey {
        ParentKey::RationalField
    }

    fn category(&self) -> Category {
        meet(&[Category::fields(), Category::infinite_enumerated_sets()])
    }

    fn an_element(&self) -> Result<Element, CategoryError> {
        Ok(Element::Rational(Rational64::new(1, 2)))
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Infinite
    }

    fn contains(&self, x: &Element) -> bool {
        x.as_rational().is_some()
    }

    fn one(&self) -> Result<Element, CategoryError> {
        Ok(Element::Rational(Rational64::one()))
    }

    fn product(&self, x: &Element, y: &Element) -> Result<Element, CategoryError> {
        let a = x.as_rational().ok_or_else(|| not_an_element(x, self))?;
        let b = y.as_rational().ok_or_else(|| not_an_element(y, self))?;
        a.checked_mul(&b)
            .map(Element::Rational)
            .ok_or(CategoryError::Overflow {
                operation: "rational product",
            })
    }

    fn name(&self) -> &ParentName {
        &self.name
    }
}

impl fmt::Display for IntegerRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.get() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "Integer Ring"),
        }
    }
}

impl fmt::Display for RationalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.get() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "Rational Field"),
        }
    }
}
