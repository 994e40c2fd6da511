use core::fmt;

use num_rational::Rational64;
use num_traits::Zero;

use super::matrix::Matrix;
use crate::element::Element;
use crate::error::CategoryError;
use crate::rings::Ring;

/// A free module of finite rank inside `R^n`, given by an echelonized basis.
///
/// Two modules are equal when they have the same ring, degree and echelon basis, so the span of
/// all of `R^n` is the ambient module itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FreeModule {
    ring: Ring,
    basis: Matrix,
}

impl FreeModule {
    /// The ambient free module `R^n`.
    ///
    /// ```rust
    /// # use category_constructions::prelude::*;
    /// assert_eq!(
    ///     FreeModule::new(QQ, 3).to_string(),
    ///     "Vector space of dimension 3 over Rational Field"
    /// );
    /// assert_eq!(
    ///     FreeModule::new(ZZ, 3).to_string(),
    ///     "Ambient free module of rank 3 over the principal ideal domain Integer Ring"
    /// );
    /// ```
    pub fn new(ring: Ring, n: usize) -> Self {
        Self {
            ring,
            basis: Matrix::identity(n),
        }
    }

    /// The submodule spanned by `gens`. Only supported over a field.
    ///
    /// Echelonizing may fail with [`CategoryError::Overflow`] for very large coefficients.
    pub fn subspace(&self, gens: &[Vec<Rational64>]) -> Result<FreeModule, CategoryError> {
        if !self.ring.is_field() {
            return Err(CategoryError::NotAField { ring: self.ring });
        }
        for v in gens {
            self.check_degree(v)?;
            if !self.contains(v) {
                return Err(self.not_an_element(v));
            }
        }
        let (echelon, pivots) = Matrix::from_rows(self.degree(), gens.to_vec())?.echelon_form()?;
        let rows = echelon
            .rows()
            .take(pivots.len())
            .map(<[Rational64]>::to_vec)
            .collect();
        Ok(Self {
            ring: self.ring,
            basis: Matrix::from_rows(self.degree(), rows)?,
        })
    }

    /// The same span over `ring`.
    ///
    /// A proper subspace cannot be moved to a ring which is not a field.
    pub fn change_ring(&self, ring: Ring) -> Result<FreeModule, CategoryError> {
        if self.is_ambient() {
            Ok(Self::new(ring, self.degree()))
        } else if ring.is_field() {
            Ok(Self {
                ring,
                basis: self.basis.clone(),
            })
        } else {
            Err(CategoryError::NotAField { ring })
        }
    }

    pub fn base_ring(&self) -> Ring {
        self.ring
    }

    pub fn rank(&self) -> usize {
        self.basis.nrows()
    }

    /// The dimension of the ambient module.
    pub fn degree(&self) -> usize {
        self.basis.ncols()
    }

    pub fn is_ambient(&self) -> bool {
        self.basis.is_one()
    }

    pub fn basis(&self) -> Vec<Vec<Rational64>> {
        self.basis.rows().map(<[Rational64]>::to_vec).collect()
    }

    pub fn basis_matrix(&self) -> &Matrix {
        &self.basis
    }

    pub fn zero(&self) -> Vec<Rational64> {
        vec![Rational64::zero(); self.degree()]
    }

    pub fn contains(&self, v: &[Rational64]) -> bool {
        v.len() == self.degree()
            && v.iter().all(|x| self.ring.contains(x))
            && self.coordinates(v).is_ok()
    }

    /// The coefficients of `v` on the echelon basis.
    pub fn coordinates(&self, v: &[Rational64]) -> Result<Vec<Rational64>, CategoryError> {
        self.check_degree(v)?;
        // in echelon form, the coefficient on a basis row is the entry at its pivot
        let coordinates: Vec<Rational64> = self
            .basis
            .rows()
            .map(|row| {
                row.iter()
                    .zip(v)
                    .find(|(x, _)| !x.is_zero())
                    .map_or(Rational64::zero(), |(_, c)| *c)
            })
            .collect();
        if self.basis.vector_times(&coordinates)? == v {
            Ok(coordinates)
        } else {
            Err(self.not_an_element(v))
        }
    }

    fn check_degree(&self, v: &[Rational64]) -> Result<(), CategoryError> {
        if v.len() == self.degree() {
            Ok(())
        } else {
            Err(CategoryError::DimensionMismatch {
                expected: self.degree(),
                actual: v.len(),
            })
        }
    }

    fn not_an_element(&self, v: &[Rational64]) -> CategoryError {
        CategoryError::NotAnElement {
            element: Element::Vector(v.to_vec()).to_string(),
            parent: self.to_string(),
        }
    }
}

impl fmt::Display for FreeModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (ring, degree, rank) = (self.ring, self.degree(), self.rank());
        match (self.ring.is_field(), self.is_ambient()) {
            (true, true) => write!(f, "Vector space of dimension {rank} over {ring}"),
            (true, false) => write!(
                f,
                "Vector space of degree {degree} and dimension {rank} over {ring}\nBasis matrix:\n{}",
                self.basis
            ),
            (false, true) => write!(
                f,
                "Ambient free module of rank {rank} over the principal ideal domain {ring}"
            ),
            (false, false) => write!(
                f,
                "Free module of degree {degree} and rank {rank} over {ring}\nEchelon basis matrix:\n{}",
                self.basis
            ),
        }
    }
}
