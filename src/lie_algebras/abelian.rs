//! The abelian Lie algebra on a free module.
//!
//! Let `R` be a commutative ring and `M` a free `R`-module. The abelian Lie algebra on `M` is
//! `M` endowed with the trivial bracket `[x, y] = 0`.
//!
//! ```rust
//! use category_constructions::prelude::*;
//!
//! let l = AbelianLieAlgebra::example(QQ).unwrap();
//! assert_eq!(
//!     l.to_string(),
//!     "An example of a finite dimensional Lie algebra with basis: \
//!      the 3-dimensional abelian Lie algebra over Rational Field"
//! );
//! let basis = l.basis();
//! let (a, b, c) = (&basis[&0], &basis[&1], &basis[&2]);
//! let (a2, b2, c3) = ((a * 2).unwrap(), (b * 2).unwrap(), (c * 3).unwrap());
//! let elt = (&(&a2 + &b2).unwrap() + &c3).unwrap();
//! assert_eq!(elt.lift().to_string(), "2*a + 2*b + 3*c");
//! assert_eq!(a.bracket(c).unwrap(), l.zero());
//! ```
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use std::collections::BTreeMap;
use std::rc::Rc;

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Zero};
use tracing::debug;

use super::enveloping::{LinearPolynomial, UniversalEnvelopingAlgebra};
use crate::algebra::{FreeModule, Matrix};
use crate::category::{BaseCategory, Category};
use crate::element::{write_separated, Element};
use crate::error::CategoryError;
use crate::parent::{Cardinality, Parent, ParentKey, ParentName};
use crate::rings::Ring;
use crate::unique::UniqueCache;

#[derive(Debug)]
pub struct AbelianLieAlgebra {
    ring: Ring,
    module: FreeModule,
    // `None` when this algebra is its own ambient
    ambient: Option<Rc<AbelianLieAlgebra>>,
    category: Category,
    name: ParentName,
}

thread_local! {
    static ABELIAN_LIE_ALGEBRAS: UniqueCache<ParentKey, AbelianLieAlgebra> = UniqueCache::new();
}

impl AbelianLieAlgebra {
    /// The abelian Lie algebra over `ring` on `module`, or on the free module of rank `n` when
    /// no module is given. With an `ambient`, the result is a Lie subalgebra of it.
    ///
    /// The arguments are normalized to `(ring, module, ambient)` before looking up the unique
    /// instance, so every way of describing the same algebra gives the same instance:
    ///
    /// ```rust
    /// # use category_constructions::prelude::*;
    /// # use std::rc::Rc;
    /// let a1 = AbelianLieAlgebra::new(QQ, Some(3), None, None).unwrap();
    /// let a2 = AbelianLieAlgebra::new(QQ, None, Some(FreeModule::new(QQ, 3)), None).unwrap();
    /// let a3 = AbelianLieAlgebra::new(QQ, Some(3), Some(FreeModule::new(QQ, 3)), None).unwrap();
    /// assert!(Rc::ptr_eq(&a1, &a2) && Rc::ptr_eq(&a2, &a3));
    /// ```
    pub fn new(
        ring: Ring,
        n: Option<usize>,
        module: Option<FreeModule>,
        ambient: Option<Rc<AbelianLieAlgebra>>,
    ) -> Result<Rc<Self>, CategoryError> {
        let module = match module {
            Some(module) => module.change_ring(ring)?,
            None => FreeModule::new(ring, n.ok_or(CategoryError::MissingRank)?),
        };
        let key = ParentKey::AbelianLieAlgebra {
            ring,
            module: module.clone(),
            ambient: ambient.as_ref().map(|a| Box::new(a.key())),
        };
        ABELIAN_LIE_ALGEBRAS.with(|cache| {
            cache.try_get_or_insert_with(key, || {
                let mut category =
                    Category::named(BaseCategory::FiniteDimensionalLieAlgebrasWithBasis(ring));
                if ambient.is_some() {
                    category = category.subobjects()?;
                }
                debug!(rank = module.rank(), %ring, "new abelian Lie algebra");
                Ok(AbelianLieAlgebra {
                    ring,
                    module,
                    ambient,
                    category,
                    name: ParentName::default(),
                })
            })
        })
    }

    /// The 3-dimensional abelian Lie algebra over `ring`.
    pub fn example(ring: Ring) -> Result<Rc<Self>, CategoryError> {
        Self::new(ring, Some(3), None, None)
    }

    pub fn base_ring(&self) -> Ring {
        self.ring
    }

    /// The dimension.
    pub fn n(&self) -> usize {
        self.module.rank()
    }

    pub fn free_module(&self) -> &FreeModule {
        &self.module
    }

    pub fn basis_matrix(&self) -> &Matrix {
        self.module.basis_matrix()
    }

    /// The Lie algebra this one is a subalgebra of, or itself.
    pub fn ambient(self: &Rc<Self>) -> Rc<Self> {
        self.ambient.clone().unwrap_or_else(|| Rc::clone(self))
    }

    pub fn zero(self: &Rc<Self>) -> LieElement {
        LieElement {
            parent: Rc::clone(self),
            value: self.module.zero(),
        }
    }

    /// The element with the coordinates `v` in the ambient module.
    pub fn element(self: &Rc<Self>, v: &[Rational64]) -> Result<LieElement, CategoryError> {
        if self.module.contains(v) {
            Ok(LieElement {
                parent: Rc::clone(self),
                value: v.to_vec(),
            })
        } else {
            Err(CategoryError::NotAnElement {
                element: Element::Vector(v.to_vec()).to_string(),
                parent: self.to_string(),
            })
        }
    }

    /// The element of this algebra with the same coordinates as `x`.
    pub fn coerce(self: &Rc<Self>, x: &LieElement) -> Result<LieElement, CategoryError> {
        self.element(&x.value)
    }

    /// The Lie subalgebra generated by `gens`. Requires a field.
    pub fn subalgebra(self: &Rc<Self>, gens: &[LieElement]) -> Result<Rc<Self>, CategoryError> {
        let vectors: Vec<Vec<Rational64>> = gens.iter().map(|g| g.value.clone()).collect();
        let submodule = self.module.subspace(&vectors)?;
        AbelianLieAlgebra::new(self.ring, None, Some(submodule), Some(self.ambient()))
    }

    /// The basis, indexed by `0..n`.
    pub fn basis(self: &Rc<Self>) -> BTreeMap<usize, LieElement> {
        self.module
            .basis()
            .into_iter()
            .map(|value| LieElement {
                parent: Rc::clone(self),
                value,
            })
            .enumerate()
            .collect()
    }

    pub fn lie_algebra_generators(self: &Rc<Self>) -> BTreeMap<usize, LieElement> {
        self.basis()
    }

    pub fn gens(self: &Rc<Self>) -> Vec<LieElement> {
        self.basis().into_values().collect()
    }

    /// The polynomial ring in one generator per coordinate of the ambient module.
    pub fn universal_enveloping_algebra(&self) -> Rc<UniversalEnvelopingAlgebra> {
        Rc::new(UniversalEnvelopingAlgebra::new(
            self.ring,
            self.module.degree(),
        ))
    }

    fn ambient_key(&self) -> ParentKey {
        match &self.ambient {
            Some(ambient) => ambient.key(),
            None => self.key(),
        }
    }
}

impl Parent for AbelianLieAlgebra {
    fn key(&self) -> ParentKey {
        ParentKey::AbelianLieAlgebra {
            ring: self.ring,
            module: self.module.clone(),
            ambient: self.ambient.as_ref().map(|a| Box::new(a.key())),
        }
    }

    fn category(&self) -> Category {
        self.category.clone()
    }

    /// The sum of the basis elements.
    fn an_element(&self) -> Result<Element, CategoryError> {
        let mut sum = self.module.zero();
        for row in self.module.basis() {
            for (s, x) in sum.iter_mut().zip(row) {
                *s = s.checked_add(&x).ok_or(CategoryError::Overflow {
                    operation: "an_element()",
                })?;
            }
        }
        Ok(Element::Vector(sum))
    }

    fn cardinality(&self) -> Cardinality {
        if self.n() == 0 {
            Cardinality::Finite(1)
        } else {
            Cardinality::Infinite
        }
    }

    fn contains(&self, x: &Element) -> bool {
        match x {
            Element::Vector(v) => self.module.contains(v),
            _ => false,
        }
    }

    fn iter(&self) -> Option<Box<dyn Iterator<Item = Element> + '_>> {
        if self.n() == 0 {
            Some(Box::new(std::iter::once(Element::Vector(self.module.zero()))))
        } else {
            None
        }
    }

    fn name(&self) -> &ParentName {
        &self.name
    }
}

impl fmt::Display for AbelianLieAlgebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name.get() {
            return write!(f, "{name}");
        }
        write!(
            f,
            "An example of a finite dimensional Lie algebra with basis: \
             the {}-dimensional abelian Lie algebra over {}",
            self.n(),
            self.ring
        )?;
        let basis = self.basis_matrix();
        if !basis.is_one() {
            write!(f, " with basis matrix:\n{basis}")?;
        }
        Ok(())
    }
}

/// An element of an [`AbelianLieAlgebra`], stored by its coordinates in the ambient module.
///
/// Arithmetic between elements is partial, like composition of finite functions: `x + y` is
/// `None` unless both live in the same algebra or in subalgebras of the same ambient. Every
/// operation is also `None` when a coefficient overflows a [`Rational64`].
#[derive(Debug, Clone)]
pub struct LieElement {
    parent: Rc<AbelianLieAlgebra>,
    value: Vec<Rational64>,
}

impl LieElement {
    pub fn parent(&self) -> &Rc<AbelianLieAlgebra> {
        &self.parent
    }

    /// The nonzero `(index, coefficient)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Rational64)> + '_ {
        self.value
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
    }

    /// The coefficient at `i`.
    pub fn get(&self, i: usize) -> Option<Rational64> {
        self.value.get(i).copied()
    }

    pub fn to_vector(&self) -> Vec<Rational64> {
        self.value.clone()
    }

    pub fn is_zero(&self) -> bool {
        self.value.iter().all(Zero::is_zero)
    }

    /// The Lie bracket `[self, y]`, which is zero in an abelian Lie algebra.
    pub fn bracket(&self, y: &LieElement) -> Option<LieElement> {
        let parent = self.common_parent(y)?;
        Some(parent.zero())
    }

    /// The image in the universal enveloping algebra.
    pub fn lift(&self) -> LinearPolynomial {
        LinearPolynomial::new(
            self.parent.universal_enveloping_algebra(),
            self.value.clone(),
        )
    }

    /// `c * self`; `None` if `c` is not in the base ring.
    pub fn scale(&self, c: Rational64) -> Option<LieElement> {
        if !self.parent.base_ring().contains(&c) {
            return None;
        }
        self.scaled(&c)
    }

    fn scaled(&self, c: &Rational64) -> Option<LieElement> {
        let value = self
            .value
            .iter()
            .map(|x| x.checked_mul(c))
            .collect::<Option<Vec<_>>>()?;
        Some(LieElement {
            parent: Rc::clone(&self.parent),
            value,
        })
    }

    fn common_parent(&self, other: &LieElement) -> Option<Rc<AbelianLieAlgebra>> {
        if Rc::ptr_eq(&self.parent, &other.parent) {
            Some(Rc::clone(&self.parent))
        } else if self.parent.ambient_key() == other.parent.ambient_key() {
            Some(self.parent.ambient())
        } else {
            None
        }
    }

    fn combine(
        &self,
        other: &LieElement,
        op: impl Fn(&Rational64, &Rational64) -> Option<Rational64>,
    ) -> Option<LieElement> {
        let parent = self.common_parent(other)?;
        let value = self
            .value
            .iter()
            .zip(&other.value)
            .map(|(x, y)| op(x, y))
            .collect::<Option<Vec<_>>>()?;
        Some(LieElement { parent, value })
    }
}

impl PartialEq for LieElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.parent, &other.parent) && self.value == other.value
    }
}

impl Eq for LieElement {}

impl Add<&LieElement> for &LieElement {
    type Output = Option<LieElement>;

    fn add(self, other: &LieElement) -> Option<LieElement> {
        self.combine(other, |x, y| x.checked_add(y))
    }
}

impl Sub<&LieElement> for &LieElement {
    type Output = Option<LieElement>;

    fn sub(self, other: &LieElement) -> Option<LieElement> {
        self.combine(other, |x, y| x.checked_sub(y))
    }
}

impl Neg for &LieElement {
    type Output = Option<LieElement>;

    fn neg(self) -> Option<LieElement> {
        self.scaled(&Rational64::from_integer(-1))
    }
}

impl Mul<i64> for &LieElement {
    type Output = Option<LieElement>;

    fn mul(self, c: i64) -> Option<LieElement> {
        self.scaled(&Rational64::from_integer(c))
    }
}

impl Mul<&LieElement> for i64 {
    type Output = Option<LieElement>;

    fn mul(self, x: &LieElement) -> Option<LieElement> {
        x * self
    }
}

impl fmt::Display for LieElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_separated(f, &self.value)?;
        write!(f, ")")
    }
}
