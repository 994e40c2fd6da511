use core::fmt;
use std::rc::Rc;

use num_rational::Rational64;
use num_traits::{One, Signed, Zero};

use crate::error::CategoryError;
use crate::rings::Ring;

/// The universal enveloping algebra of an abelian Lie algebra of degree `n`: the polynomial
/// ring over `R` in `n` commuting generators, named `a, b, c, ...`.
///
/// Only the linear part is modelled, which is what lifting Lie algebra elements needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversalEnvelopingAlgebra {
    ring: Ring,
    names: Vec<String>,
}

impl UniversalEnvelopingAlgebra {
    pub fn new(ring: Ring, n: usize) -> Self {
        let names = if n <= 26 {
            (b'a'..).take(n).map(|c| char::from(c).to_string()).collect()
        } else {
            (0..n).map(|i| format!("x{i}")).collect()
        };
        Self { ring, names }
    }

    pub fn base_ring(&self) -> Ring {
        self.ring
    }

    pub fn variable_names(&self) -> &[String] {
        &self.names
    }

    pub fn ngens(&self) -> usize {
        self.names.len()
    }

    /// The linear polynomial `sum(c_i * g_i)`.
    pub fn linear(
        self: &Rc<Self>,
        coefficients: Vec<Rational64>,
    ) -> Result<LinearPolynomial, CategoryError> {
        if coefficients.len() != self.ngens() {
            return Err(CategoryError::DimensionMismatch {
                expected: self.ngens(),
                actual: coefficients.len(),
            });
        }
        Ok(LinearPolynomial::new(Rc::clone(self), coefficients))
    }
}

impl fmt::Display for UniversalEnvelopingAlgebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.names.len() == 1 {
            "Univariate"
        } else {
            "Multivariate"
        };
        write!(
            f,
            "{kind} Polynomial Ring in {} over {}",
            self.names.join(", "),
            self.ring
        )
    }
}

/// A homogeneous polynomial of degree at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearPolynomial {
    algebra: Rc<UniversalEnvelopingAlgebra>,
    coefficients: Vec<Rational64>,
}

impl LinearPolynomial {
    // callers guarantee one coefficient per generator
    pub(crate) fn new(algebra: Rc<UniversalEnvelopingAlgebra>, coefficients: Vec<Rational64>) -> Self {
        Self {
            algebra,
            coefficients,
        }
    }

    pub fn parent(&self) -> &Rc<UniversalEnvelopingAlgebra> {
        &self.algebra
    }

    pub fn coefficients(&self) -> &[Rational64] {
        &self.coefficients
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(Zero::is_zero)
    }
}

impl fmt::Display for LinearPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (c, name) in self.coefficients.iter().zip(&self.algebra.names) {
            if c.is_zero() {
                continue;
            }
            match (first, c.is_negative()) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            let magnitude = c.abs();
            if magnitude.is_one() {
                write!(f, "{name}")?;
            } else {
                write!(f, "{magnitude}*{name}")?;
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
