use core::fmt;
use std::rc::Rc;

use crate::category::Category;
use crate::element::Element;
use crate::error::CategoryError;
use crate::parent::{not_an_element, Cardinality, Parent, ParentKey, ParentName};
use crate::unique::UniqueCache;

/// The free monoid on a finite alphabet of letters.
///
/// Elements are words, stored as [`Element::Str`]; the product is concatenation and the unit is
/// the empty word.
///
/// ```rust
/// # use category_constructions::prelude::*;
/// let m = FreeMonoid::example();
/// let w = m.an_element().unwrap();
/// assert_eq!(m.product(&w, &w).unwrap().to_string(), "'abcdabcd'");
/// assert_eq!(m.one().unwrap().to_string(), "''");
/// ```
#[derive(Debug)]
pub struct FreeMonoid {
    alphabet: Vec<char>,
    name: ParentName,
}

thread_local! {
    static FREE_MONOIDS: UniqueCache<Vec<char>, FreeMonoid> = UniqueCache::new();
}

impl FreeMonoid {
    /// The free monoid generated by the distinct letters of `alphabet`, in order.
    pub fn new<I: IntoIterator<Item = char>>(alphabet: I) -> Rc<Self> {
        let mut letters: Vec<char> = Vec::new();
        for c in alphabet {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }
        FREE_MONOIDS.with(|cache| {
            cache.get_or_insert_with(letters.clone(), || FreeMonoid {
                alphabet: letters,
                name: ParentName::default(),
            })
        })
    }

    /// The free monoid on `a`, `b`, `c`, `d`.
    pub fn example() -> Rc<Self> {
        Self::new("abcd".chars())
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// The one-letter words.
    pub fn gens(&self) -> Vec<Element> {
        self.alphabet.iter().copied().map(Element::from).collect()
    }

    fn word<'a>(&self, x: &'a Element) -> Result<&'a str, CategoryError> {
        match x.as_str() {
            Some(w) if w.chars().all(|c| self.alphabet.contains(&c)) => Ok(w),
            _ => Err(not_an_element(x, self)),
        }
    }
}

impl Parent for FreeMonoid {
    fn key(&self) -> ParentKey {
        ParentKey::FreeMonoid(self.alphabet.clone())
    }

    fn category(&self) -> Category {
        Category::monoids()
    }

    fn an_element(&self) -> Result<Element, CategoryError> {
        Ok(Element::Str(self.alphabet.iter().collect()))
    }

    fn cardinality(&self) -> Cardinality {
        if self.alphabet.is_empty() {
            Cardinality::Finite(1)
        } else {
            Cardinality::Infinite
        }
    }

    fn contains(&self, x: &Element) -> bool {
        self.word(x).is_ok()
    }

    fn iter(&self) -> Option<Box<dyn Iterator<Item = Element> + '_>> {
        if self.alphabet.is_empty() {
            Some(Box::new(std::iter::once(Element::Str(String::new()))))
        } else {
            None
        }
    }

    fn one(&self) -> Result<Element, CategoryError> {
        Ok(Element::Str(String::new()))
    }

    fn product(&self, x: &Element, y: &Element) -> Result<Element, CategoryError> {
        let u = self.word(x)?;
        let v = self.word(y)?;
        Ok(Element::Str(format!("{u}{v}")))
    }

    fn name(&self) -> &ParentName {
        &self.name
    }
}

impl fmt::Display for FreeMonoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name.get() {
            return write!(f, "{name}");
        }
        let gens = Element::Tuple(self.gens());
        write!(
            f,
            "An example of a monoid: the free monoid generated by {gens}"
        )
    }
}
