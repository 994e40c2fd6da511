use core::fmt;
use std::rc::Rc;

use crate::category::Category;
use crate::element::Element;
use crate::error::CategoryError;
use crate::parent::{not_an_element, Cardinality, Parent, ParentKey, ParentName, ParentRef};
use crate::unique::UniqueCache;

/// The Cartesian product of a finite sequence of parents, in a given category.
///
/// Usually built with [`crate::construction::cartesian_product`], which computes the category
/// from the factors. Elements are [`Element::Tuple`]s with one component per factor.
pub struct CartesianProduct {
    factors: Vec<ParentRef>,
    category: Category,
    name: ParentName,
}

thread_local! {
    static CARTESIAN_PRODUCTS: UniqueCache<ParentKey, CartesianProduct> = UniqueCache::new();
}

impl CartesianProduct {
    /// The unique Cartesian product of `factors` in `category`.
    pub fn new(factors: Vec<ParentRef>, category: Category) -> Rc<Self> {
        let key = ParentKey::CartesianProduct {
            factors: factors.iter().map(|f| f.key()).collect(),
            category: category.clone(),
        };
        CARTESIAN_PRODUCTS.with(|cache| {
            cache.get_or_insert_with(key, || CartesianProduct {
                factors,
                category,
                name: ParentName::default(),
            })
        })
    }

    pub fn cartesian_factors(&self) -> &[ParentRef] {
        &self.factors
    }

    /// The `i`-th component of `x`.
    pub fn cartesian_projection(&self, i: usize, x: &Element) -> Result<Element, CategoryError> {
        if !self.contains(x) {
            return Err(not_an_element(x, self));
        }
        x.as_tuple()
            .and_then(|components| components.get(i))
            .cloned()
            .ok_or(CategoryError::DimensionMismatch {
                expected: self.factors.len(),
                actual: i,
            })
    }

    /// Build the element with the given components.
    pub fn element(&self, components: Vec<Element>) -> Result<Element, CategoryError> {
        if components.len() != self.factors.len() {
            return Err(CategoryError::DimensionMismatch {
                expected: self.factors.len(),
                actual: components.len(),
            });
        }
        let x = Element::Tuple(components);
        if self.contains(&x) {
            Ok(x)
        } else {
            Err(not_an_element(&x, self))
        }
    }

    fn require(&self, category: Category, operation: &'static str) -> Result<(), CategoryError> {
        if self.category.is_subcategory(&category) {
            Ok(())
        } else {
            Err(CategoryError::MissingStructure {
                operation,
                category: self.category.to_string(),
            })
        }
    }
}

impl Parent for CartesianProduct {
    fn key(&self) -> ParentKey {
        ParentKey::CartesianProduct {
            factors: self.factors.iter().map(|f| f.key()).collect(),
            category: self.category.clone(),
        }
    }

    fn category(&self) -> Category {
        self.category.clone()
    }

    fn an_element(&self) -> Result<Element, CategoryError> {
        self.factors
            .iter()
            .map(|f| f.an_element())
            .collect::<Result<Vec<_>, _>>()
            .map(Element::Tuple)
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::product(self.factors.iter().map(|f| f.cardinality()))
    }

    fn contains(&self, x: &Element) -> bool {
        match x.as_tuple() {
            Some(components) => {
                components.len() == self.factors.len()
                    && self
                        .factors
                        .iter()
                        .zip(components)
                        .all(|(f, c)| f.contains(c))
            }
            None => false,
        }
    }

    /// Enumerate in lexicographic order, the last factor varying fastest.
    fn iter(&self) -> Option<Box<dyn Iterator<Item = Element> + '_>> {
        if !self.cardinality().is_finite() {
            return None;
        }
        let pools = self
            .factors
            .iter()
            .map(|f| f.iter().map(Iterator::collect))
            .collect::<Option<Vec<Vec<Element>>>>()?;
        Some(Box::new(ProductIter::new(pools)))
    }

    fn one(&self) -> Result<Element, CategoryError> {
        self.require(Category::monoids(), "one()")?;
        self.factors
            .iter()
            .map(|f| f.one())
            .collect::<Result<Vec<_>, _>>()
            .map(Element::Tuple)
    }

    fn product(&self, x: &Element, y: &Element) -> Result<Element, CategoryError> {
        self.require(Category::magmas(), "product()")?;
        let (Some(xs), Some(ys)) = (x.as_tuple(), y.as_tuple()) else {
            return Err(not_an_element(if x.as_tuple().is_none() { x } else { y }, self));
        };
        if xs.len() != self.factors.len() {
            return Err(not_an_element(x, self));
        }
        if ys.len() != self.factors.len() {
            return Err(not_an_element(y, self));
        }
        self.factors
            .iter()
            .zip(xs.iter().zip(ys))
            .map(|(f, (a, b))| f.product(a, b))
            .collect::<Result<Vec<_>, _>>()
            .map(Element::Tuple)
    }

    fn name(&self) -> &ParentName {
        &self.name
    }
}

impl fmt::Display for CartesianProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name.get() {
            return write!(f, "{name}");
        }
        write!(f, "The cartesian product of (")?;
        for (i, factor) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{factor}")?;
        }
        if self.factors.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

// Odometer over the pools: increments the last index first.
struct ProductIter {
    pools: Vec<Vec<Element>>,
    indices: Vec<usize>,
    done: bool,
}

impl ProductIter {
    fn new(pools: Vec<Vec<Element>>) -> Self {
        let done = pools.iter().any(Vec::is_empty);
        let indices = vec![0; pools.len()];
        Self {
            pools,
            indices,
            done,
        }
    }
}

impl Iterator for ProductIter {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        if self.done {
            return None;
        }
        let item = Element::Tuple(
            self.pools
                .iter()
                .zip(&self.indices)
                .map(|(pool, &i)| pool[i].clone())
                .collect(),
        );

        // advance; with no pools there is exactly one (empty) tuple
        self.done = true;
        for k in (0..self.pools.len()).rev() {
            self.indices[k] += 1;
            if self.indices[k] < self.pools[k].len() {
                self.done = false;
                break;
            }
            self.indices[k] = 0;
        }
        Some(item)
    }
}
